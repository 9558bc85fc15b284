mod decoder;
mod encoder;

pub use decoder::{decode_first_sheet, DecodeError};
pub use encoder::{encode_workbook, EncodeError};
