use std::{
    fs::{read_dir, read_to_string},
    path::PathBuf,
};

pub struct JsonTest {
    pub path: PathBuf,
    /// The element as it is received.
    pub element: String,
    /// The canonical encoding, `None` if the element must be rejected.
    pub encoded: Option<String>,
}

pub fn collect_json_tests() -> Result<Vec<JsonTest>, Box<dyn std::error::Error>> {
    let mut tests = Vec::new();

    for test_dir in read_dir(concat!(env!("CARGO_MANIFEST_DIR"), "/resources"))? {
        let test_dir_path = test_dir?.path();

        if !test_dir_path.is_dir() {
            continue;
        }

        let element_path = test_dir_path.join("element.json");
        let encoded_path = test_dir_path.join("encoded.json");

        let element = read_to_string(&element_path)
            .unwrap_or_else(|_| {
            panic!(
                "no element.json in test directory {}",
                test_dir_path.display()
            )
        });

        let encoded = if encoded_path.exists() {
            Some(read_to_string(&encoded_path)?.trim().to_owned())
        } else {
            None
        };

        tests.push(JsonTest {
            path: test_dir_path,
            element,
            encoded,
        });
    }

    tests.sort_by(|a, b| a.path.cmp(&b.path));

    Ok(tests)
}

#[macro_export]
macro_rules! element {
    ($name:literal) => {
        ocpi_tariff_model::ocpi::tariff::OcpiTariffElement::from_json_str(include_str!(concat!(
            "../resources/",
            $name,
            "/element.json"
        )))
        .unwrap()
    };
}
