use crate::error::AppError;

pub const PARAM_PET_ID: &str = "petId";
pub const PARAM_USER_ID: &str = "userId";
pub const PARAM_TYPE: &str = "type";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogActivityParams {
    pub pet_id: String,
    pub user_id: String,
    pub activity_type: String,
}

impl LogActivityParams {
    /// Picks the three required parameters out of a decoded query string.
    ///
    /// Empty values are accepted. A repeated parameter resolves to its last
    /// occurrence. Every missing name is reported, in declaration order.
    pub fn parse(query: &[(String, String)]) -> Result<Self, AppError> {
        let pet_id = last_value(query, PARAM_PET_ID);
        let user_id = last_value(query, PARAM_USER_ID);
        let activity_type = last_value(query, PARAM_TYPE);

        match (pet_id, user_id, activity_type) {
            (Some(pet_id), Some(user_id), Some(activity_type)) => Ok(Self {
                pet_id,
                user_id,
                activity_type,
            }),
            (pet_id, user_id, activity_type) => {
                let missing = [
                    (PARAM_PET_ID, pet_id.is_none()),
                    (PARAM_USER_ID, user_id.is_none()),
                    (PARAM_TYPE, activity_type.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, absent)| absent.then_some(name))
                .collect();

                Err(AppError::Validation { missing })
            }
        }
    }
}

fn last_value(query: &[(String, String)], name: &str) -> Option<String> {
    query
        .iter()
        .rev()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.clone())
}
