use clap::Parser;

pub const PROD_API_BASE_URL: &str = "https://api.denvertts303.com";
pub const LOCAL_API_BASE_URL: &str = "http://localhost:8000";

#[must_use]
pub fn args_checks() -> Args {
    Args::parse()
}

/// Runtime configuration. One knob: which tee-sheet backend to talk to.
#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Talk to a locally running backend instead of production
    #[arg(short, long)]
    pub local: bool,
}

impl Args {
    #[must_use]
    pub fn api_base_url(&self) -> &'static str {
        if self.local {
            LOCAL_API_BASE_URL
        } else {
            PROD_API_BASE_URL
        }
    }
}
