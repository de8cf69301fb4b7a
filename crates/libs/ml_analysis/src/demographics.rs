use crate::FaceRecord;
use std::path::Path;

/// Face demographics for the given image.
///
/// Mocked output, replace with a real classifier wrapper. The path is
/// accepted so the signature survives that swap.
#[must_use]
pub fn get_face_demographics(_file: &Path) -> Vec<FaceRecord> {
    vec![
        FaceRecord {
            face_id: 1,
            gender: "male".to_string(),
            race: "East Asian".to_string(),
            age_range: "30-39".to_string(),
        },
        FaceRecord {
            face_id: 2,
            gender: "female".to_string(),
            race: "White".to_string(),
            age_range: "40-49".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demographics_are_fixed() {
        let faces = get_face_demographics(Path::new("any.jpg"));
        assert_eq!(faces.len(), 2);

        assert_eq!(faces[0].face_id, 1);
        assert_eq!(faces[0].gender, "male");
        assert_eq!(faces[0].race, "East Asian");
        assert_eq!(faces[0].age_range, "30-39");

        assert_eq!(faces[1].face_id, 2);
        assert_eq!(faces[1].gender, "female");
        assert_eq!(faces[1].race, "White");
        assert_eq!(faces[1].age_range, "40-49");
    }

    #[test]
    fn test_demographics_ignore_path() {
        assert_eq!(
            get_face_demographics(Path::new("a.jpg")),
            get_face_demographics(Path::new("b.png"))
        );
    }
}
