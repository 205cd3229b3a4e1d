use super::availability::RoomId;

#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: u32,
    pub name: String,
    pub description: String,
}

impl Room {
    pub fn room_id(&self) -> RoomId {
        RoomId::from(self.id)
    }

    pub fn href(&self) -> String {
        format!("/rooms/{}", self.id)
    }
}

#[derive(Debug, Clone)]
pub struct RoomCatalog {
    rooms: Vec<Room>,
}

impl Default for RoomCatalog {
    fn default() -> Self {
        Self {
            rooms: vec![
                Room {
                    id: 1,
                    name: "General's Quarters".to_string(),
                    description: "A quiet corner room with a writing desk and a view over the garden."
                        .to_string(),
                },
                Room {
                    id: 2,
                    name: "Major's Suite".to_string(),
                    description: "Two connected rooms with a private bath and space for a family."
                        .to_string(),
                },
            ],
        }
    }
}

impl RoomCatalog {
    pub fn get_all(&self) -> &[Room] {
        &self.rooms
    }

    pub fn find(&self, id: &str) -> Option<&Room> {
        let id: u32 = id.trim().parse().ok()?;
        self.rooms.iter().find(|room| room.id == id)
    }
}
