use std::io;

use smsc::{Cost, SendOptions, SmscClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let login = std::env::var("SMSC_LOGIN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSC_LOGIN environment variable is required",
        )
    })?;
    let password = std::env::var("SMSC_PASSWORD").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSC_PASSWORD environment variable is required",
        )
    })?;
    let phone = std::env::var("SMSC_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSC_PHONE environment variable is required",
        )
    })?;
    let message = std::env::var("SMSC_MESSAGE")
        .unwrap_or_else(|_| "Hello from the smsc example.".to_owned());

    let client = SmscClient::builder(login, password).build()?;
    let options = SendOptions::new().cost(Cost::CountBalance);

    match client.send(message, [phone], options).await {
        Ok(result) => {
            println!("{result}");
            println!("cost: {:?}, balance: {:?}", result.cost, result.balance);
        }
        Err(err) => {
            let retryable = err.api_error().is_some_and(|api| api.code.is_retryable());
            if !retryable {
                return Err(err.into());
            }
            println!("{err} (try again later)");
        }
    }

    Ok(())
}
