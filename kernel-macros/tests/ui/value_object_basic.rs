use kernel_domain::value_object::ValueObject;
use kernel_macros::value_object;

#[value_object]
struct Amount {
    value: i64,
    currency: String,
}

#[value_object(debug = false)]
struct Opaque(i32);

impl std::fmt::Debug for Opaque {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Opaque(..)")
    }
}

#[value_object]
enum Level {
    Low,
    High,
}

fn main() {
    let a = Amount { value: 1, currency: "CNY".to_string() };
    let b = a.clone();
    assert!(a.equals(Some(&b)));
    assert!(a.validate().is_ok());

    // 手写 Debug 可编译说明宏未重复派生
    let _ = format!("{:?}", Opaque(1));

    assert!(Level::Low.equals(Some(&Level::Low)));
    assert!(!Level::Low.equals(Some(&Level::High)));
}
