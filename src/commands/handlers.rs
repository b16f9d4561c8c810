//! Command handlers
//!
//! One function per verb. `ls` and `cat` read the granted directory and
//! suspend; everything else resolves immediately.

use futures::future::FutureExt;
use tracing::debug;

use super::registry::Registry;
use super::{Action, CommandContext, CommandError, CommandFuture, CommandResult};
use crate::config::Theme;
use crate::models::{Fragment, ListingItem};

/// Version printed by `version`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Placeholder for recognized verbs without behavior
pub const NOT_IMPLEMENTED: &str = "Oops, that's not implemented yet.";

/// Local date/time layout, e.g. `3/14/2024, 9:05:07 PM`
pub const DATE_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

pub const CAT_USAGE: &str = "usage: cat [filename]";
pub const THEME_USAGE: &str = "usage: theme <theme>";
pub const UNKNOWN_THEME: &str = "Error, unknown theme provided.";
pub const HELP_HINT: &str = "Add files by copying them into the granted folder. Verbs are case-insensitive.";

fn print(fragment: Fragment) -> CommandResult {
    Ok(vec![Action::Print(fragment)])
}

pub fn not_implemented(_context: &CommandContext, _args: &[String]) -> CommandResult {
    print(Fragment::text(NOT_IMPLEMENTED))
}

pub fn clear(_context: &CommandContext, _args: &[String]) -> CommandResult {
    Ok(vec![Action::ClearScreen])
}

pub fn date(context: &CommandContext, _args: &[String]) -> CommandResult {
    print(Fragment::text(context.now.format(DATE_FORMAT).to_string()))
}

pub fn version(_context: &CommandContext, _args: &[String]) -> CommandResult {
    print(Fragment::text(format!("v{}", VERSION)))
}

pub fn help(_context: &CommandContext, _args: &[String]) -> CommandResult {
    let verbs = Registry::builtin().listed().map(ListingItem::file).collect();
    Ok(vec![
        Action::Print(Fragment::Listing(verbs)),
        Action::Print(Fragment::paragraph(HELP_HINT)),
    ])
}

pub fn theme(context: &CommandContext, args: &[String]) -> CommandResult {
    let name = args.join(" ");
    if name.is_empty() {
        return Ok(vec![
            Action::Print(Fragment::text(THEME_USAGE)),
            Action::Print(Fragment::text(format!(
                "Available themes: {}",
                Theme::available()
            ))),
        ]);
    }

    match Theme::from_name(&name) {
        Some(theme) => {
            debug!(from = %context.theme, to = %theme, "theme change requested");
            Ok(vec![Action::SetTheme(theme)])
        }
        None => print(Fragment::error(UNKNOWN_THEME)),
    }
}

/// Clears the screen and flips the 3D view, which has no renderer yet
pub fn three_d(_context: &CommandContext, _args: &[String]) -> CommandResult {
    Ok(vec![
        Action::ClearScreen,
        Action::Toggle3dView,
        Action::Print(Fragment::text(NOT_IMPLEMENTED)),
    ])
}

pub fn ls(context: CommandContext, _args: Vec<String>) -> CommandFuture {
    list_directory(context).boxed()
}

async fn list_directory(context: CommandContext) -> CommandResult {
    let entries = context
        .directory
        .list_entries()
        .await
        .map_err(CommandError::directory("ls"))?;

    let items = entries
        .into_iter()
        .map(|entry| {
            if entry.is_directory {
                ListingItem::folder(entry.name)
            } else {
                ListingItem::file(entry.name)
            }
        })
        .collect();

    Ok(vec![Action::Print(Fragment::Listing(items))])
}

/// Filename is every argument joined with single spaces
pub fn cat(context: CommandContext, args: Vec<String>) -> CommandFuture {
    read_file(context, args.join(" ")).boxed()
}

async fn read_file(context: CommandContext, filename: String) -> CommandResult {
    if filename.is_empty() {
        return print(Fragment::text(CAT_USAGE));
    }

    let contents = context
        .directory
        .read_to_string(&filename)
        .await
        .map_err(CommandError::directory("cat"))?;

    Ok(vec![Action::Print(Fragment::Preformatted(contents))])
}
