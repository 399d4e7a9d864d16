use strum_macros::{AsRefStr, EnumString};

/// Fixed `@id`s of the single attachment each present-proof 1.0 message carries.
#[derive(Copy, Clone, Debug, AsRefStr, EnumString, PartialEq, Eq)]
pub enum AttachmentId {
    #[strum(serialize = "libindy-request-presentation-0")]
    RequestPresentation,
    #[strum(serialize = "libindy-presentation-0")]
    Presentation,
}

/// Looks up the attachment with the given [`AttachmentId`] and decodes its base64 payload into a
/// `String`. Returns early with a `MalformedMessage` error when the attachment is absent or is
/// not base64 encoded UTF-8.
#[rustfmt::skip]
macro_rules! get_attach_as_string {
    ($attachments:expr, $id:expr) => {{
        let __id: $crate::handlers::util::AttachmentId = $id;
        let __attach = $attachments
            .iter()
            .find(|a| a.id.as_deref() == Some(__id.as_ref()));
        let Some(__attach) = __attach else {
            return Err($crate::errors::error::AriesProofError::from_msg(
                $crate::errors::error::AriesProofErrorKind::MalformedMessage,
                format!("Message has no attachment with id {}", __id.as_ref()),
            ));
        };
        let $crate::messages::decorators::attachment::AttachmentType::Base64(encoded_attach) = &__attach.data.content else {
            return Err($crate::errors::error::AriesProofError::from_msg(
                $crate::errors::error::AriesProofErrorKind::MalformedMessage,
                format!("Attachment {} is not base64 encoded: {:?}", __id.as_ref(), __attach.data.content),
            ));
        };
        let bytes = base64::engine::Engine::decode(&base64::engine::general_purpose::STANDARD, encoded_attach)?;
        String::from_utf8(bytes)?
    }};
}

/// Builds a JSON attachment carrying `$str_attach` base64 encoded, under the given
/// [`AttachmentId`].
macro_rules! make_attach_from_str {
    ($str_attach:expr, $id:expr) => {{
        let __id: $crate::handlers::util::AttachmentId = $id;
        let attach_type = $crate::messages::decorators::attachment::AttachmentType::Base64(
            base64::engine::Engine::encode(&base64::engine::general_purpose::STANDARD, $str_attach),
        );
        let attach_data = $crate::messages::decorators::attachment::AttachmentData::builder()
            .content(attach_type)
            .build();
        $crate::messages::decorators::attachment::Attachment::builder()
            .id(__id.as_ref().to_owned())
            .mime_type($crate::messages::misc::MimeType::Json)
            .data(attach_data)
            .build()
    }};
}
