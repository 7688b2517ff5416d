mod clients;
mod workflow;

use vehicle_form::{UploadError, UploadSource};

/// An image held in memory, standing in for a file picked in the browser.
#[derive(Debug, Clone, PartialEq)]
pub struct TestImage {
    pub name: &'static str,
    pub data: Vec<u8>,
}

impl UploadSource for TestImage {
    fn file_name(&self) -> String {
        self.name.to_string()
    }

    async fn read(&self) -> Result<Vec<u8>, UploadError> {
        Ok(self.data.clone())
    }
}

pub fn image(name: &'static str) -> TestImage {
    // a few bytes of JPEG header are plenty for the stand-in
    TestImage {
        name,
        data: vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F'],
    }
}
