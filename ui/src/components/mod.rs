pub mod admin_setup;
pub mod confirmation_modal;
pub mod layout;
pub mod news_card;
pub mod news_editor_modal;
pub mod product_editor_modal;
pub mod require_role;
pub mod theme_toggle;
pub mod toast;

pub use admin_setup::AdminUserSetup;
pub use confirmation_modal::ConfirmationModal;
pub use layout::MainLayout;
pub use news_card::NewsCard;
pub use news_editor_modal::NewsEditorModal;
pub use product_editor_modal::ProductEditorModal;
pub use require_role::RequireRole;
pub use theme_toggle::ThemeToggle;
pub use toast::ToastContainer;
