//! Folder-name encoding checks through the public API.

use sdgen::error::GenError;
use sdgen::ids::{folder_name, folder_name_str, new_profile_id};
use uuid::Uuid;

#[test]
fn test_known_pairs() {
    let pairs = [
        ("e4f228ae-b631-4b80-a552-76f65595373e", "SJP2HBLM655O19AIERR5B59N7OZ"),
        ("ff328353-96b5-42ac-b90c-8c63c2a397cb", "WSP86KSMML1APE8CHHHS58SNPCZ"),
        ("5abecb50-4b82-4e9e-a087-1fc3bc990deb", "BAWCMK2BG979T8473W1RP68DTCZ"),
    ];
    for (id, folder) in pairs {
        let uuid = Uuid::parse_str(id).unwrap();
        assert_eq!(folder_name(&uuid), folder);
    }
}

#[test]
fn test_distinct_ids_get_distinct_folders() {
    let a = new_profile_id();
    let b = new_profile_id();
    assert_ne!(a, b);
    assert_ne!(folder_name(&a), folder_name(&b));
}

#[test]
fn test_rejects_malformed_id() {
    let err = folder_name_str("33860c96-e0d7-48dd").unwrap_err();
    assert!(matches!(err, GenError::InvalidProfileId { .. }));
    assert!(err.is_user_recoverable());
}
