use crate::auth::FileAuth;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the identity subcommands (register, login, logout, whoami).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let auth = FileAuth::new(cfg);

    match cmd {
        Commands::Register { email, password } => {
            let id = auth.register(email, password)?;
            success(format!("Registered and signed in as {}.", id.email));
        }
        Commands::Login { email, password } => {
            let id = auth.login(email, password)?;
            success(format!("Signed in as {}.", id.email));
        }
        Commands::Logout => {
            auth.logout()?;
            success("Signed out.");
        }
        Commands::Whoami => match auth.current()? {
            Some(id) => info(format!("Signed in as {} (uid {}).", id.email, id.uid)),
            None => info("Not signed in."),
        },
        _ => {}
    }

    Ok(())
}
