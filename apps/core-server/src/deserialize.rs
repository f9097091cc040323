use secrecy::SecretString;
use serde::{Deserialize, Deserializer};

pub(crate) fn opt_secret_string<'de, D>(d: D) -> Result<Option<SecretString>, D::Error>
where
    D: Deserializer<'de>,
{
    let data = Option::<String>::deserialize(d)?;
    Ok(data.map(SecretString::from))
}
