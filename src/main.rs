mod cli;
mod preprocess;
mod validator;

use cli::Cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (_cli, shader_source) = Cli::parse_and_load()?;
    let standalone_source = preprocess::prepare_standalone(&shader_source);
    validator::run_validator(&standalone_source)
}
