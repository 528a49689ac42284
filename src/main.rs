use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use nalgebra::Point2;
use parking_lot::RwLock;
use tracing::info;

use vision_acquire::config::AcquisitionParams;
use vision_acquire::geometry::{Rect, Wall, WallSet};
use vision_acquire::system::display::{StatusLabel, StatusPanel};
use vision_acquire::system::motion::MotionController;
use vision_acquire::system::SessionState;
use vision_acquire::tracking::ObjectType;

/// Status panel that forwards label text to the log.
struct LogPanel;

struct LogLabel;

impl StatusLabel for LogLabel {
    fn set_text(&self, text: &str) {
        info!("{text}");
    }
}

impl StatusPanel for LogPanel {
    fn add_label(&self, initial: &str) -> Box<dyn StatusLabel> {
        info!("{initial}");
        Box::new(LogLabel)
    }
}

/// Motion controller that accepts every command and arrives instantly.
struct SimController;

impl MotionController for SimController {
    fn drive_to(&self, target: Point2<f64>) {
        info!(x = target.x, y = target.y, "drive");
    }

    fn reached(&self) -> bool {
        true
    }

    fn halt(&self) {
        info!("halt");
    }

    fn grip(&self) {
        info!("grip");
    }

    fn release(&self) {
        info!("release");
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("vision_acquire=debug".parse()?),
        )
        .init();

    let mut session = SessionState::new(Arc::new(SimController), AcquisitionParams::default());
    session.attach_display(&LogPanel);

    // Synthetic detections: the robot near the middle of the frame, the
    // object off to one side, walls from a fake detector pass.
    session.acquire_robot_box(Rect::new(40.0, 40.0, 10.0, 10.0))?;
    session.acquire_object_box(Rect::new(120.0, 60.0, 8.0, 8.0))?;
    session.acquire_walls(Arc::new(RwLock::new(WallSet::from([
        Wall::new(Point2::new(0.0, 0.0), Point2::new(160.0, 0.0)),
        Wall::new(Point2::new(160.0, 0.0), Point2::new(160.0, 120.0)),
    ]))));
    session.set_tracking_robot(true);
    session.set_tracking_object(true);
    session.set_object_type(ObjectType::Upright);

    info!(
        robot_valid = session.is_robot_box_valid(),
        object_valid = session.is_object_box_valid(),
        "detections scored"
    );

    // Plan a short path from the robot to the object and traverse it.
    session.clear_path();
    let start = session.robot_box(true).center();
    let goal = session.object_box(false).center();
    session.append_path(start.x, start.y);
    session.append_path((start.x + goal.x) / 2.0, (start.y + goal.y) / 2.0);
    session.append_path(goal.x, goal.y);

    session.begin_traversal();
    thread::sleep(Duration::from_millis(100));
    session.halt_traversal()?;

    // Relocate the object to the target box.
    session.acquire_target_box(Rect::new(20.0, 100.0, 12.0, 12.0));
    let drop_off = session.target_box().center();
    session.clear_path();
    session.append_path(goal.x, goal.y);
    session.append_path(drop_off.x, drop_off.y);

    session.begin_object_move();
    thread::sleep(Duration::from_millis(100));
    session.halt_object_move()?;

    Ok(())
}
