use std::env;
use std::process::ExitCode;

use cubemaker_host::{CliArgs, HostResult, SceneWalker};
use cubemaker_op::{build_op_args, CubeMakerOp};

fn run() -> HostResult<String> {
    let cli = CliArgs::parse(env::args())?;
    let args = build_op_args(&cli.params)?;
    let walker = SceneWalker::new(CubeMakerOp);
    let scene = if cli.parallel {
        walker.walk_parallel(args)?
    } else {
        walker.walk(args)?
    };
    log::info!(
        "{} locations, {} meshes, {} errors",
        scene.len(),
        scene.meshes().count(),
        scene.error_count()
    );
    scene.to_json()
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("cubemaker: {err}");
            ExitCode::FAILURE
        }
    }
}
