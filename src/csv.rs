use std::error::Error;

/// Serializes items to CSV with a header row
/// # Error
/// Errors if an item cannot be represented as a CSV record
pub fn serialize(
    items: impl Iterator<Item = impl serde::Serialize>,
) -> Result<Vec<u8>, Box<dyn Error>> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    for item in items {
        wtr.serialize(item)?
    }
    Ok(wtr.into_inner().map_err(|e| e.into_error())?)
}

/// Deserializes records of a CSV with a header row
pub fn deserialize<'a, D: serde::de::DeserializeOwned + 'a>(
    data: &'a [u8],
) -> impl Iterator<Item = Result<D, csv::Error>> + 'a {
    let rdr = csv::ReaderBuilder::new()
        .delimiter(b',')
        .trim(csv::Trim::All)
        .from_reader(std::io::Cursor::new(data));
    rdr.into_deserialize()
}
