pub mod commands;
pub mod content;
pub mod folder;
pub mod folder_view;
pub mod id;
pub mod operations;
pub mod palette;
pub mod seed;
pub mod store;
pub mod view_mode;

pub use content::{ContentId, ContentItem, NewContent, PLACEHOLDER_THUMBNAIL};
pub use folder::{item_count_label, Folder, FolderColor, FolderIcon, FolderId};
pub use folder_view::FolderView;
pub use id::{EntityId, IdGenerator};
pub use operations::VaultOperations;
pub use palette::{ColorPolicy, CyclingColorPolicy, FixedColorPolicy, RandomColorPolicy};
pub use store::VaultStore;
pub use view_mode::ViewMode;
