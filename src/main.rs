use smartsched::core::cli::CliPaths;
use smartsched::core::context::AppContext;
use smartsched::logging::LogTarget;
use smartsched::prompter::flows::main_flow::MainFlow;
use smartsched::prompter::prompter::Prompter;

fn main() {
    let paths = match CliPaths::from_env() {
        Ok(paths) => paths,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("Usage: smartsched [--config <path>] [--logs <dir>]");
            std::process::exit(1);
        }
    };
    let mut ctx = match AppContext::new_with_paths(paths.config_path, paths.logs_dir) {
        Ok(ctx) => ctx,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    let prompter = Prompter::new();
    let flow = MainFlow::new(&mut ctx);

    if let Err(err) = prompter.run(flow) {
        ctx.logger
            .error(format!("{err}"), LogTarget::ConsoleAndFile);
    }
}
