use crate::PublicIncidentDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PublicIncidentListResponse {
    pub incidents: Vec<PublicIncidentDto>,
}
