//! Visual debug overlay demo
//!
//! Builds a marker database and a headless overlay at the composition root,
//! runs a few simulated frames of debug drawing, then prints the visible
//! scene as RON.
//!
//! Usage: `overlay_demo [config.toml|config.ron]`

use game_toolkit::config::ConfigFormat;
use game_toolkit::foundation::math::constants::TAU;
use game_toolkit::prelude::*;
use rand::prelude::*;
use serde::Deserialize;
use thiserror::Error;

// Simulation constants
const FRAME_COUNT: usize = 4;
const SCATTER_POINTS: usize = 8;
const ARENA_HALF_SIZE: f32 = 10.0;

/// Marker database authored in RON
const MARKERS: &str = r#"(
    elements: [
        (id: "spawn", x: 0.0, y: 0.0, radius: 2.0, color: Lime),
        (id: "exit", x: 8.0, y: -6.0, radius: 1.0, color: Red),
        (id: "shop", x: -5.0, y: 4.0, radius: 1.5, color: Yellow),
    ],
)"#;

#[derive(Debug, Error)]
enum DemoError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error("Failed to serialize scene: {0}")]
    Snapshot(#[from] ron::Error),

    #[error("Service {0} was not registered")]
    MissingService(&'static str),
}

/// Named area of interest in the level
#[derive(Debug, Clone, Deserialize)]
struct MarkerDef {
    id: String,
    x: f32,
    y: f32,
    radius: f32,
    color: DebugColor,
}

impl MarkerDef {
    fn circle(&self) -> Circle {
        Circle::new(Point::new(self.x, self.y), self.radius)
    }
}

impl DatabaseElement for MarkerDef {
    fn id(&self) -> &str {
        &self.id
    }
}

type Overlay = VisualDebugManager<HeadlessBackend>;

fn load_config() -> Result<ApplicationConfig, ConfigError> {
    match std::env::args().nth(1) {
        Some(path) => {
            let config = ApplicationConfig::load_from_file(&path)?;
            config.validate()?;
            Ok(config)
        }
        None => Ok(ApplicationConfig::default()),
    }
}

/// Circle every marker and link consecutive markers with segments
fn draw_markers(databases: &DatabaseManager, overlay: &mut Overlay) {
    let Some(markers) = databases.get::<MarkerDef>() else {
        return;
    };

    for marker in markers.elements() {
        overlay.show_circle(marker.id.as_str(), marker.circle(), marker.color);
        overlay.show_point(marker.id.as_str(), Point::new(marker.x, marker.y), marker.color);
    }

    for pair in markers.elements().windows(2) {
        let segment = LineSegment::new(Point::new(pair[0].x, pair[0].y), Point::new(pair[1].x, pair[1].y));
        overlay.show_line_segment("route", segment, DebugColor::Gray);
    }
}

/// Redraw per-frame shapes: random samples and a rotating heading arrow
fn draw_frame(frame: usize, rng: &mut impl Rng, overlay: &mut Overlay) {
    overlay.hide_points("scatter");
    overlay.hide_triangles("heading");

    for _ in 0..SCATTER_POINTS {
        let point = Point::new(
            rng.gen_range(-ARENA_HALF_SIZE..ARENA_HALF_SIZE),
            rng.gen_range(-ARENA_HALF_SIZE..ARENA_HALF_SIZE),
        );
        overlay.show_point("scatter", point, DebugColor::Silver);
    }

    let angle = frame as f32 * TAU / FRAME_COUNT as f32;
    let (sin, cos) = angle.sin_cos();
    let tip = Point::new(3.0 * cos, 3.0 * sin);
    let left = Point::new(-sin, cos);
    let right = Point::new(sin, -cos);
    overlay.show_triangle("heading", Triangle::new(tip, left, right), DebugColor::Fuchsia);

    // Unnamed shapes land under the default id
    overlay.show_point(None, Point::new(0.0, 0.0), DebugColor::White);
    overlay.hide_points(None);

    let stats = overlay.stats();
    log::info!(
        "Frame {}: {} shapes visible, dots {}/{} pooled, lines {}/{} pooled",
        frame,
        overlay.active_count(),
        stats.dots.available,
        stats.dots.spawned,
        stats.lines.available,
        stats.lines.spawned
    );
}

fn main() -> Result<(), DemoError> {
    let config = load_config()?;
    logging::init_with_level(&config.logging.log_level);

    // Composition root: everything is built here and passed down explicitly
    let mut databases = DatabaseManager::new();
    databases.register(Database::<MarkerDef>::parse(MARKERS, ConfigFormat::Ron)?)?;
    let mut overlay = Overlay::new(HeadlessBackend::new(), config.visual_debug.clone())?;
    let services = ServiceRegistry::new().with(config).with(databases);
    log::info!("Services: {:?}", services.names());

    let databases = services
        .get::<DatabaseManager>()
        .ok_or(DemoError::MissingService("DatabaseManager"))?;
    draw_markers(databases, &mut overlay);

    let mut rng = thread_rng();
    for frame in 0..FRAME_COUNT {
        draw_frame(frame, &mut rng, &mut overlay);
    }

    overlay.hide_all("exit");
    log::info!("Circles still shown for: {:?}", overlay.ids(ShapeCategory::Circles));

    let snapshot = overlay.backend().snapshot();
    println!("{}", ron::ser::to_string_pretty(&snapshot, ron::ser::PrettyConfig::default())?);

    overlay.clear();
    log::info!("Cleared overlay, {} primitives remain visible", overlay.backend().active_count());
    Ok(())
}
