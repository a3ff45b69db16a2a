use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Sign in with Google (browser) or email and password.
    Login(AuthLoginArgs),
    /// Create an email/password account and sign in.
    Signup(AuthSignupArgs),
    /// Clear the stored session.
    Logout,
    /// Show current auth status.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    /// Sign in with Google through the browser.
    #[arg(long, conflicts_with_all = ["email", "password"])]
    pub google: bool,
    /// Account email.
    #[arg(long, requires = "password")]
    pub email: Option<String>,
    /// Account password.
    #[arg(long, requires = "email")]
    pub password: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct AuthSignupArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    #[arg(long)]
    pub confirm_password: String,
}
