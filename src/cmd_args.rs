use std::ffi::OsString;

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// CNPJ to look up; punctuation is accepted and stripped
    #[clap(help = "CNPJ da empresa, ex: 11.222.333/0001-81")]
    cnpj: String,

    /// Also print the normalized number and request URL
    #[clap(short = 'v', long, help = "verbose output")]
    verbose: bool,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    cnpj: String,
    verbose: bool,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        let args = ClapArgs::parse();
        Self {
            cnpj: args.cnpj,
            verbose: args.verbose,
        }
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = ClapArgs::parse_from(itr);
        Self {
            cnpj: args.cnpj,
            verbose: args.verbose,
        }
    }

    pub fn cnpj(&self) -> &String {
        &self.cnpj
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}
