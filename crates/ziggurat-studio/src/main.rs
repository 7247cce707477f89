mod app;
mod controls;
mod palette;

use winit::dpi::LogicalSize;
use ziggurat_engine::device::GpuInit;
use ziggurat_engine::logging::{init_logging, LoggingConfig};
use ziggurat_engine::window::{Runtime, RuntimeConfig};

use app::{LifeStudio, StudioConfig, TITLE};

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    log::info!("P pause | C clear | A slower | Z faster | R reset view | arrows pan | PgUp/PgDn zoom");

    let runtime = RuntimeConfig {
        title: TITLE.to_string(),
        initial_size: LogicalSize::new(
            controls::REFERENCE_VIEW.width as f64,
            controls::REFERENCE_VIEW.height as f64,
        ),
    };

    Runtime::run(runtime, GpuInit::default(), LifeStudio::new(StudioConfig::default()))
}
