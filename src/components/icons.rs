//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuBookOpen as FilePdf, LuChevronRight as ChevronRight, LuEye as Eye,
        LuEyeOff as EyeSlash, LuFile as File, LuFileText as FileText, LuFolder as Folder,
        LuHouse as Home, LuImage as FileImage, LuRefreshCw as Refresh, LuUser as User,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowClockwise as Refresh, BsChevronRight as ChevronRight, BsEye as Eye,
        BsEyeSlash as EyeSlash, BsFileEarmark as File, BsFileEarmarkImage as FileImage,
        BsFileEarmarkPdf as FilePdf, BsFileEarmarkText as FileText, BsFolderFill as Folder,
        BsHouseFill as Home, BsPerson as User,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

// Navigation
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(HOME, Home);

// Entries
themed_icon!(FOLDER, Folder);
themed_icon!(FILE, File);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(FILE_PDF, FilePdf);
themed_icon!(FILE_IMAGE, FileImage);

// Actions
themed_icon!(EYE, Eye);
themed_icon!(EYE_SLASH, EyeSlash);
themed_icon!(REFRESH, Refresh);
themed_icon!(USER, User);
