pub mod category_list;
pub mod dashboard;
pub mod login;
pub mod post_form;
pub mod post_list;
pub mod tag_list;

pub use category_list::AdminCategoryList;
pub use dashboard::AdminDashboard;
pub use login::AdminLogin;
pub use post_form::{AdminPostEdit, AdminPostNew};
pub use post_list::AdminPostList;
pub use tag_list::AdminTagList;
