//! Well-known storage keys. The key space is this fixed set; readers must
//! tolerate any of them being absent.

/// Serialized cart line-item collection.
pub const CART: &str = "cart";

/// Serialized user profile snapshot.
pub const USER_PROFILE: &str = "user_profile";

/// Phone number of the signed-in-by-phone user.
pub const USER_PHONE: &str = "user_phone";

/// Phone used on the most recent order; used to look up order history
/// without requiring a login.
pub const LAST_ORDER_PHONE: &str = "last_order_phone";

/// Last device location fix, with its capture timestamp.
pub const CACHED_LOCATION: &str = "cached_location";

/// Whether location permission was granted.
pub const LOCATION_PERMISSION: &str = "location_permission";
