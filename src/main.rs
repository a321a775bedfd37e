use anyhow::Result;
use clap::Parser;
use env_logger::Env;

use fractal_plane::{Cli, ImageFilePresenter, RenderController, RenderRequest};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let request = RenderRequest::try_from(Cli::parse())?;
    let mut controller = RenderController::new(ImageFilePresenter::new(), request);

    controller.run()
}
