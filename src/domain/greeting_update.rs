use serde::Deserialize;

#[derive(Deserialize)]
struct UpdateBody {
    //null and a missing key both land here as None
    greeting: Option<String>,
}

#[derive(thiserror::Error)]
pub enum UpdateGreetingError {
    #[error("No greeting provided")]
    MissingGreetingField,
    #[error("No greeting provided")]
    MalformedBody(#[source] serde_json::Error),
}

impl std::fmt::Debug for UpdateGreetingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by: \n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}

//only the presence of the key is checked, the content is taken as-is
#[derive(Debug)]
pub struct GreetingUpdate(String);

impl GreetingUpdate {
    pub fn parse(body: &[u8]) -> Result<Self, UpdateGreetingError> {
        let body: UpdateBody =
            serde_json::from_slice(body).map_err(UpdateGreetingError::MalformedBody)?;
        body.greeting
            .map(Self)
            .ok_or(UpdateGreetingError::MissingGreetingField)
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for GreetingUpdate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
