//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Storage-assigned task identifier.
        id -> Int8,
        /// Task title.
        #[max_length = 100]
        title -> Varchar,
        /// Optional task description.
        #[max_length = 500]
        description -> Nullable<Varchar>,
        /// Canonical task status name.
        #[max_length = 20]
        status -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp, unset until the first update.
        updated_at -> Nullable<Timestamptz>,
    }
}
