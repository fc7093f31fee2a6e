//! Print the OpenAPI document as JSON.

use anyhow::Result;

fn main() -> Result<()> {
    let doc = authgate::api::openapi();
    println!("{}", doc.to_pretty_json()?);
    Ok(())
}
