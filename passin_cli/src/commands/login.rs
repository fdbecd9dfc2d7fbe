use anyhow::Result;
use clap::Args;
use passin_lib::types::Credentials;
use passin_lib::validation;
use passin_lib::Client;

use crate::config::Config;

#[derive(Args)]
pub struct LoginArgs {
    /// CPF, digits only or formatted as 000.000.000-00
    #[arg(long)]
    pub cpf: String,

    /// Password
    #[arg(long)]
    pub senha: String,
}

pub async fn run(args: &LoginArgs, client: &Client, config: &Config) -> Result<()> {
    let cpf = validation::validate_cpf(&args.cpf)?;
    let credentials = Credentials {
        cpf,
        senha: args.senha.clone(),
    };

    let payload = client.login(&credentials).await?;
    config.auth_session().save(&payload)?;

    println!(
        "Logged in as {} ({})",
        payload.user.nome_completo,
        validation::format_cpf(&payload.user.cpf)
    );
    Ok(())
}
