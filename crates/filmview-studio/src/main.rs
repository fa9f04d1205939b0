mod bindings;
mod options;
mod viewer;

use clap::Parser;

use filmview_engine::logging::{init_logging, LoggingConfig};
use filmview_engine::window::Runtime;

use crate::options::Options;
use crate::viewer::Viewer;

fn main() -> anyhow::Result<()> {
    let options = Options::parse();

    init_logging(LoggingConfig {
        env_filter: options.log.clone(),
        ..LoggingConfig::default()
    });

    let config = options.runtime_config();
    let viewer = Viewer::new(config.title.clone(), options.initial_state());

    log::info!(
        "starting viewer: format {} scale {:.2} intensity {:.2}",
        options.format,
        options.initial_state().scale_factor(),
        options.intensity
    );

    Runtime::run(config, options.gpu_init(), viewer)
}
