//! REPL commands

use kino_client::ViewController;
use kino_client::view::CatalogAction;
use thiserror::Error;

use crate::render;
use crate::terminal::Terminal;

pub const HELP: &str = "\
Account:      login | register | logout
Page:         show | refresh | help | quit
Catalog:      request <id> | select <id> | edit <id> | delete <id> | assign <id> | create
Wallet:       topup | withdraw
Payments:     pay | refund | autorenew <subscription id> on|off
Admin queue:  approve <request id> | reject <request id>
Inbox:        read <notification id>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    Show,
    Refresh,
    Login,
    Register,
    Logout,
    Topup,
    Withdraw,
    Pay,
    Refund,
    Create,
    Catalog(i64, CatalogAction),
    Approve(i64),
    Reject(i64),
    AutoRenew { subscription_id: i64, enable: bool },
    Read(i64),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command \"{0}\", type \"help\" for the list")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),
}

impl Command {
    /// Parse one input line; blank lines are `None`
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();
        let name = name.to_ascii_lowercase();

        let command = match name.as_str() {
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            "show" => Self::Show,
            "refresh" => Self::Refresh,
            "login" => Self::Login,
            "register" => Self::Register,
            "logout" => Self::Logout,
            "topup" => Self::Topup,
            "withdraw" => Self::Withdraw,
            "pay" => Self::Pay,
            "refund" => Self::Refund,
            "create" => Self::Create,
            "request" => Self::Catalog(id_arg(&args, "request <id>")?, CatalogAction::RequestAccess),
            "select" => Self::Catalog(id_arg(&args, "select <id>")?, CatalogAction::Pay),
            "edit" => Self::Catalog(id_arg(&args, "edit <id>")?, CatalogAction::Edit),
            "delete" => Self::Catalog(id_arg(&args, "delete <id>")?, CatalogAction::Delete),
            "assign" => Self::Catalog(id_arg(&args, "assign <id>")?, CatalogAction::AssignToSelf),
            "approve" => Self::Approve(id_arg(&args, "approve <request id>")?),
            "reject" => Self::Reject(id_arg(&args, "reject <request id>")?),
            "read" => Self::Read(id_arg(&args, "read <notification id>")?),
            "autorenew" => {
                const USAGE: &str = "autorenew <subscription id> on|off";
                let subscription_id = id_arg(&args, USAGE)?;
                let enable = match args.get(1).map(|s| s.to_ascii_lowercase()).as_deref() {
                    Some("on") => true,
                    Some("off") => false,
                    _ => return Err(CommandError::Usage(USAGE)),
                };
                Self::AutoRenew {
                    subscription_id,
                    enable,
                }
            }
            _ => return Err(CommandError::Unknown(name)),
        };
        Ok(Some(command))
    }
}

fn id_arg(args: &[&str], usage: &'static str) -> Result<i64, CommandError> {
    match args {
        [raw] => raw.parse().map_err(|_| CommandError::Usage(usage)),
        _ => Err(CommandError::Usage(usage)),
    }
}

/// Run one command against the controller and print the outcome
pub async fn run(ctl: &mut ViewController, term: &mut Terminal, command: Command) {
    let result = match command {
        Command::Quit => return,
        Command::Help => {
            println!("{HELP}");
            return;
        }
        Command::Show => {
            println!("{}", render::page(ctl.view()));
            return;
        }
        Command::Refresh => {
            if ctl.session().is_authenticated() {
                ctl.render_signed_in().await;
            } else {
                ctl.bootstrap().await;
            }
            Ok(())
        }
        Command::Login => {
            let Some(username) = term.ask("Username", "") else {
                return;
            };
            let Some(password) = term.ask_secret("Password") else {
                return;
            };
            let form = &mut ctl.view_mut().forms.login;
            form.username = username;
            form.password = password;
            ctl.login().await
        }
        Command::Register => {
            let (Some(username), Some(email), Some(password)) = (
                term.ask("Username", ""),
                term.ask("Email", ""),
                term.ask_secret("Password"),
            ) else {
                return;
            };
            let form = &mut ctl.view_mut().forms.register;
            form.username = username;
            form.email = email;
            form.password = password;
            ctl.register().await
        }
        Command::Logout => {
            ctl.logout();
            Ok(())
        }
        Command::Topup | Command::Withdraw => {
            let (Some(amount), Some(description)) =
                (term.ask("Amount", ""), term.ask("Description", ""))
            else {
                return;
            };
            let forms = &mut ctl.view_mut().forms;
            let form = if command == Command::Topup {
                &mut forms.topup
            } else {
                &mut forms.withdraw
            };
            form.amount = amount;
            form.description = description;
            if command == Command::Topup {
                ctl.submit_topup().await
            } else {
                ctl.submit_withdraw().await
            }
        }
        Command::Pay => {
            let current = ctl.view().forms.pay.clone();
            let (Some(subscription_id), Some(amount), Some(method)) = (
                term.ask("Subscription id", &current.subscription_id),
                term.ask("Amount", &current.amount),
                term.ask("Payment method (balance/card/yoomoney)", &current.payment_method),
            ) else {
                return;
            };
            let form = &mut ctl.view_mut().forms.pay;
            form.subscription_id = subscription_id;
            form.amount = amount;
            form.payment_method = method;
            ctl.submit_payment().await
        }
        Command::Refund => {
            let (Some(payment_id), Some(reason)) =
                (term.ask("Payment id", ""), term.ask("Reason", ""))
            else {
                return;
            };
            let form = &mut ctl.view_mut().forms.refund;
            form.payment_id = payment_id;
            form.reason = reason;
            ctl.submit_refund().await
        }
        Command::Create => {
            let (Some(name), Some(price), Some(days), Some(description)) = (
                term.ask("Name", ""),
                term.ask("Price", ""),
                term.ask("Duration (days)", ""),
                term.ask("Description", ""),
            ) else {
                return;
            };
            let form = &mut ctl.view_mut().forms.create_subscription;
            form.name = name;
            form.price = price;
            form.duration_days = days;
            form.description = description;
            ctl.create_subscription().await
        }
        Command::Catalog(subscription_id, action) => {
            ctl.activate(subscription_id, action, term).await
        }
        Command::Approve(request_id) => ctl.approve_request(request_id).await,
        Command::Reject(request_id) => ctl.reject_request(request_id).await,
        Command::AutoRenew {
            subscription_id,
            enable,
        } => ctl.set_auto_renew(subscription_id, enable).await,
        Command::Read(notification_id) => ctl.mark_notification_read(notification_id).await,
    };

    if let Err(e) = result {
        tracing::debug!(?command, error = %e, "Command failed");
    }
    println!("{}", render::page(ctl.view()));
}
