//! GATT link constants shared with the sender.
//!
//! The BLE stack itself lives outside this workspace; these values pin
//! down the contract between the transport adapter and sender tooling.

/// 16-bit UUID of the image transfer service
pub const IMAGE_SERVICE_UUID: u16 = 0x00FF;

/// 16-bit UUID of the image data characteristic
pub const IMAGE_DATA_CHAR_UUID: u16 = 0xFF01;

/// Advertised device name
pub const DEVICE_NAME: &str = "ESP32-EPaper";

/// Chunk size the sender writes after the first chunk
pub const CHUNK_MTU: usize = 500;

/// Payload bytes in the first chunk (header takes the other 8)
pub const FIRST_CHUNK_PAYLOAD: usize = CHUNK_MTU - crate::header::HEADER_LEN;
