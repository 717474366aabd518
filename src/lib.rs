pub mod follower_table_util;
pub mod nonfollower_util;
