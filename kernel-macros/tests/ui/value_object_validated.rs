use kernel_domain::value_object::ValueObject;
use kernel_macros::value_object;

#[value_object(validated)]
#[serde(transparent)]
struct Percent(u8);

impl ValueObject for Percent {
    type Error = String;

    fn validate(&self) -> Result<(), Self::Error> {
        if self.0 > 100 {
            return Err(format!("{} exceeds 100", self.0));
        }
        Ok(())
    }
}

fn main() {
    assert!(Percent(42).validate().is_ok());
    assert!(Percent(142).validate().is_err());
}
