use crate::output;
use serde::Serialize;
use vault_domain::FolderIcon;

#[derive(Serialize)]
struct IconEntry {
    name: &'static str,
    label: &'static str,
    glyph: char,
}

pub fn handle() -> anyhow::Result<()> {
    let icons = FolderIcon::PICKER
        .iter()
        .map(|icon| IconEntry {
            name: icon.name(),
            label: icon.label(),
            glyph: icon.glyph(),
        })
        .collect();
    output::output_list::<IconEntry>(icons)?;
    Ok(())
}
