//! Render what a registration would send, without sending it
//!
//! Handy for checking message wording and the WhatsApp link. Needs only
//! `WHATSAPP_NUMBER`; no database or SMTP access.

use anyhow::{Context, Result};
use clap::Parser;

use nuryanti_core::compose::{self, ComposedMessages};
use nuryanti_core::{RegistrationRecord, WhatsAppNumber};

#[derive(Parser, Debug)]
pub struct PreviewArgs {
    /// Child's full name
    #[arg(long)]
    pub child_name: String,

    /// Parent's full name
    #[arg(long)]
    pub parent_name: String,

    /// Parent's email address
    #[arg(long)]
    pub email: String,

    /// Parent's phone number
    #[arg(long)]
    pub phone: String,

    /// Home address
    #[arg(long)]
    pub address: String,

    /// School WhatsApp number that receives the notice
    #[arg(long, env = "WHATSAPP_NUMBER")]
    pub whatsapp_number: String,
}

pub fn run_preview(args: PreviewArgs) -> Result<()> {
    let number = WhatsAppNumber::parse(&args.whatsapp_number)?;
    let record = RegistrationRecord::new(
        &args.child_name,
        &args.parent_name,
        &args.email,
        &args.phone,
        &args.address,
    )
    .context("Registration would be rejected")?;

    let messages = ComposedMessages::for_record(&record);

    println!("== {} ==", compose::INTERNAL_NOTICE_SUBJECT);
    println!("{}", messages.internal_notice);
    println!("== {} (to {}) ==", compose::CONFIRMATION_SUBJECT, record.email());
    println!("{}", messages.confirmation);
    println!("== WhatsApp ==");
    println!("{}", number.deep_link(&messages.internal_notice));
    Ok(())
}
