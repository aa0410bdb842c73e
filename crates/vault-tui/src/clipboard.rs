use std::io;
use vault_domain::ContentItem;

/// Puts an item's link on the system clipboard so it can be opened in a browser.
pub fn copy_link(item: &ContentItem) -> io::Result<()> {
    let mut clipboard = arboard::Clipboard::new().map_err(io::Error::other)?;
    clipboard
        .set_text(item.url.clone())
        .map_err(io::Error::other)?;
    tracing::info!("Copied link for '{}' to clipboard", item.title);
    Ok(())
}
