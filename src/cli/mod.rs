use self::{atlas::Atlas, extract::Extract, info::Info};

mod atlas;
mod extract;
mod info;

pub enum CliRes {
    Ok,
    Err,
}

pub trait Cli {
    fn name(&self) -> &'static str;
    /// Each module has to handle the arguments by itself.
    fn cli(&self) -> CliRes;
    fn cli_help(&self);
}

/// Runs command-line options.
pub fn cli() -> CliRes {
    let mut args = std::env::args();

    // Add new modules here.
    let modules: &[&dyn Cli] = &[&Info, &Extract, &Atlas];

    let help = || {
        println!(
            "\
g1grab

Available modules:"
        );
        for module in modules {
            println!("{}", module.name());
        }
    };

    let Some(command) = args.nth(1) else {
        help();
        return CliRes::Err;
    };

    for module in modules {
        if command == module.name() {
            return module.cli();
        }
    }

    // In case nothing fits then prints this again.
    help();

    CliRes::Err
}
