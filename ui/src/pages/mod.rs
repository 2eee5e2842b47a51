pub mod admin;
pub mod admin_news;
pub mod admin_products;
pub mod admin_users;
pub mod home;
pub mod news;
pub mod news_detail;
pub mod not_found;
pub mod product_detail;
pub mod products;
pub mod sign_in;

pub use admin::AdminPage;
pub use admin_news::AdminNewsPage;
pub use admin_products::AdminProductsPage;
pub use admin_users::AdminUsersPage;
pub use home::HomePage;
pub use news::NewsPage;
pub use news_detail::NewsDetailPage;
pub use not_found::NotFoundPage;
pub use product_detail::ProductDetailPage;
pub use products::ProductsPage;
pub use sign_in::SignInPage;
