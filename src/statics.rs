// Central place for save field names and other fixed constants.
// Keep these out of the editing code so renames in the save format stay in one spot.
// Serde field renames in `document` spell the JSON names inline.

// Behavior carrying the instance id of every game object.
pub const ONI_BEHAVIOR_PREFAB_ID: &str = "KPrefabID";
// Field of the prefab behavior's template data holding the id.
pub const ONI_FIELD_INSTANCE_ID: &str = "InstanceID";

// Common behavior names, handy for hosts and tests.
pub const ONI_BEHAVIOR_HEALTH: &str = "Health";
pub const ONI_BEHAVIOR_MINION_IDENTITY: &str = "MinionIdentity";
pub const ONI_BEHAVIOR_STORAGE: &str = "Storage";

// Common group (prefab type) names.
pub const ONI_GROUP_MINION: &str = "Minion";
