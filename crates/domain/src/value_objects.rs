pub use post_stats_shared_kernel::value_objects::*;
