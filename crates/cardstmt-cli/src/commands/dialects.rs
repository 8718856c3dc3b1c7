//! Dialects command - list supported issuers.

use console::style;

use cardstmt_core::statement::DialectRegistry;

pub async fn run() -> anyhow::Result<()> {
    println!("{}", style("Supported dialects:").bold());
    for dialect in DialectRegistry::all() {
        println!("  {:<8} {}", dialect.id(), dialect.bank_name());
    }
    println!();
    println!("Use --dialect auto to detect the issuer from the statement text.");

    Ok(())
}
