//! End-to-end form workflows against the mocked API seam.

use async_trait::async_trait;
use dash_client::{Api, ApiError, MemorySessionStore, SessionStore};
use dash_form::{
    CredentialField, FormError, LoginForm, ProfileField, ProfileForm, SupportForm, TicketField,
};
use dash_model::{
    AuthUser, FileUpload, ProfileRecord, SaveProfilePayload, SupportPayload,
    SupportRequestRecord, UploadedAsset,
};
use dash_test_utils::{
    jpeg_upload, sample_auth_user, sample_profile_record, MockApi,
};
use mockall::predicate::eq;
use pretty_assertions::assert_eq;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[tokio::test]
async fn login_then_load_then_edit_then_save() {
    init_tracing();
    let mut api = MockApi::new();
    api.expect_login()
        .with(eq("jo@example.com"), eq("abc123"))
        .times(1)
        .returning(|_, _| Ok(sample_auth_user()));
    api.expect_get_me()
        .with(eq("abc"))
        .times(1)
        .returning(|_| Ok(sample_auth_user()));
    api.expect_get_profile()
        .with(eq("u-1"))
        .times(1)
        .returning(|_| Ok(Some(sample_profile_record())));
    api.expect_save_profile()
        .withf(|user_id, payload| {
            user_id == "u-1"
                && payload.name == "Jo D. Doe"
                && payload.phone_number == "9876543210"
                && payload.date_of_birth.as_deref() == Some("1994-06-15")
        })
        .times(1)
        .returning(|_, _| Ok(()));

    let session = MemorySessionStore::new();

    let mut login = LoginForm::new();
    login.set_field(CredentialField::Email, "jo@example.com");
    login.set_field(CredentialField::Password, "abc123");
    login.submit(&api, &session).await.unwrap();
    assert!(session.is_authenticated());

    let mut profile = ProfileForm::new();
    profile.load(&api, &session).await.unwrap();
    assert!(profile.profile_exists());
    assert_eq!(profile.draft().name, "Jo Doe");

    profile.set_field(ProfileField::Name, "Jo D. Doe");
    profile.save(&api).await.unwrap();
    assert_eq!(profile.general_error(), None);
}

#[tokio::test]
async fn validation_failures_are_recoverable_without_refetching() {
    init_tracing();
    let mut api = MockApi::new();
    api.expect_get_me().times(1).returning(|_| Ok(sample_auth_user()));
    api.expect_get_profile().times(1).returning(|_| Ok(None));
    // Exactly one save reaches the wire: the invalid attempt stays local.
    api.expect_save_profile().times(1).returning(|_, _| Ok(()));

    let session = MemorySessionStore::with_user(dash_test_utils::sample_session_user());

    let mut profile = ProfileForm::new();
    profile.load(&api, &session).await.unwrap();

    profile.set_field(ProfileField::Name, "Jo");
    profile.set_field(ProfileField::Phone, "98765");
    let err = profile.save(&api).await.unwrap_err();
    assert_eq!(err, FormError::Invalid);
    assert_eq!(
        profile.errors().get("phone"),
        Some("Phone number must be exactly 10 digits")
    );

    // Fixing the fields clears the errors as typed, then save goes through.
    profile.set_field(ProfileField::Phone, "9876543210");
    profile.set_field(ProfileField::Gender, "Other");
    profile.set_field(ProfileField::About, "A short introduction.");
    assert_eq!(profile.errors().get("phone"), None);
    profile.save(&api).await.unwrap();
    assert!(profile.profile_exists());
}

#[tokio::test]
async fn photo_lifecycle_updates_session_cache_both_ways() {
    init_tracing();
    let mut api = MockApi::new();
    api.expect_get_me().times(1).returning(|_| Ok(sample_auth_user()));
    api.expect_get_profile().times(1).returning(|_| Ok(None));
    api.expect_upload_file().times(1).returning(|_| {
        Ok(UploadedAsset {
            url: "https://cdn.example.com/jo.jpg".to_string(),
        })
    });
    api.expect_set_profile_photo()
        .with(eq("u-1"), eq("https://cdn.example.com/jo.jpg"))
        .times(1)
        .returning(|_, _| Ok(()));
    api.expect_delete_profile_photo()
        .with(eq("u-1"))
        .times(1)
        .returning(|_| Ok(()));

    let session = MemorySessionStore::with_user(dash_test_utils::sample_session_user());

    let mut profile = ProfileForm::new();
    profile.load(&api, &session).await.unwrap();

    profile.upload_photo(&api, &session, jpeg_upload()).await.unwrap();
    assert_eq!(
        session.get().unwrap().profile_photo.as_deref(),
        Some("https://cdn.example.com/jo.jpg")
    );

    profile.remove_photo(&api, &session).await.unwrap();
    assert_eq!(session.get().unwrap().profile_photo, None);
    assert_eq!(profile.draft().profile_photo, "");
}

#[tokio::test]
async fn support_ticket_retry_after_server_refusal() {
    init_tracing();
    let mut api = MockApi::new();
    let mut refusals = 0;
    api.expect_submit_support().times(2).returning(move |_| {
        refusals += 1;
        if refusals == 1 {
            Err(ApiError::Server {
                status: 503,
                message: "Try again later".to_string(),
            })
        } else {
            Ok(())
        }
    });

    let mut form = SupportForm::open("u-1", "jo@example.com");
    form.set_field(TicketField::Subject, "Broken page");
    form.set_field(TicketField::Description, "The dashboard will not load");
    form.set_field(TicketField::ContactNumber, "9876543210");

    let err = form.submit(&api).await.unwrap_err();
    assert_eq!(err, FormError::Remote("Try again later".to_string()));
    assert_eq!(form.general_error(), Some("Try again later"));
    assert!(!form.submitted());

    // Draft survives, so a straight retry succeeds.
    form.submit(&api).await.unwrap();
    assert!(form.submitted());

    form.finish();
    assert_eq!(form.ticket().subject, "");
}

/// Stub whose save never completes; everything the test does not exercise
/// is unreachable.
struct HangingApi;

#[async_trait]
impl Api for HangingApi {
    async fn save_profile(
        &self,
        _user_id: &str,
        _payload: &SaveProfilePayload,
    ) -> Result<(), ApiError> {
        std::future::pending().await
    }

    async fn get_me(&self, _user_id: &str) -> Result<AuthUser, ApiError> {
        Ok(sample_auth_user())
    }

    async fn get_profile(&self, _user_id: &str) -> Result<Option<ProfileRecord>, ApiError> {
        Ok(None)
    }

    async fn login(&self, _email: &str, _password: &str) -> Result<AuthUser, ApiError> {
        unreachable!()
    }

    async fn signup(&self, _email: &str, _password: &str) -> Result<AuthUser, ApiError> {
        unreachable!()
    }

    async fn set_profile_photo(&self, _user_id: &str, _photo_url: &str) -> Result<(), ApiError> {
        unreachable!()
    }

    async fn delete_profile_photo(&self, _user_id: &str) -> Result<(), ApiError> {
        unreachable!()
    }

    async fn share_profile(&self, _user_id: &str) -> Result<String, ApiError> {
        unreachable!()
    }

    async fn upload_file(&self, _upload: FileUpload) -> Result<UploadedAsset, ApiError> {
        unreachable!()
    }

    async fn submit_support(&self, _payload: &SupportPayload) -> Result<(), ApiError> {
        unreachable!()
    }

    async fn support_history(
        &self,
        _user_id: &str,
    ) -> Result<Vec<SupportRequestRecord>, ApiError> {
        unreachable!()
    }
}

// No timeout is layered on top of a save: an unresponsive server leaves the
// form in its saving state indefinitely.
#[tokio::test(start_paused = true)]
async fn hung_save_keeps_the_saving_flag() {
    init_tracing();
    let api = HangingApi;
    let session = MemorySessionStore::with_user(dash_test_utils::sample_session_user());

    let mut profile = ProfileForm::new();
    profile.load(&api, &session).await.unwrap();
    profile.set_field(ProfileField::Name, "Jo Doe");
    profile.set_field(ProfileField::Gender, "Other");
    profile.set_field(ProfileField::Phone, "9876543210");
    profile.set_field(ProfileField::About, "A short introduction.");

    {
        let save = profile.save(&api);
        tokio::pin!(save);
        tokio::select! {
            _ = &mut save => panic!("save should still be outstanding"),
            () = tokio::time::sleep(std::time::Duration::from_secs(3600)) => {}
        }
    }
    assert!(profile.is_saving());
}

#[tokio::test]
async fn logout_keeps_remember_me_but_blocks_profile_load() {
    init_tracing();
    let mut api = MockApi::new();
    api.expect_login().times(1).returning(|_, _| Ok(sample_auth_user()));

    let session = MemorySessionStore::new();

    let mut login = LoginForm::new();
    login.set_field(CredentialField::Email, "jo@example.com");
    login.set_field(CredentialField::Password, "abc123");
    login.set_remember_me(true);
    login.submit(&api, &session).await.unwrap();

    session.clear();
    assert!(session.remembered());

    let mut profile = ProfileForm::new();
    let err = profile.load(&api, &session).await.unwrap_err();
    assert_eq!(err, FormError::NotLoggedIn);
}
