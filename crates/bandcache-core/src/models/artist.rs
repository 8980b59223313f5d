use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Artist {
    pub id: i64,
    pub name: String,
    pub image: String,
    #[serde(rename = "creationDate")]
    pub creation_date: i64,
    #[serde(rename = "firstAlbum")]
    pub first_album: String,
    #[serde(default)]
    pub members: Vec<String>,
}

impl Artist {
    /// "1 member" / "4 members"
    pub fn member_count_display(&self) -> String {
        match self.members.len() {
            1 => "1 member".to_string(),
            n => format!("{} members", n),
        }
    }
}
