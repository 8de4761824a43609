use waproto::whatsapp as wa;

/// Maximum number of future-proof wrappers peeled off a message before giving up.
pub const MAX_WRAPPER_DEPTH: usize = 5;

/// Kind of user-facing payload a message carries once wrappers are removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Conversation,
    Image,
    Contact,
    Location,
    ExtendedText,
    Document,
    Audio,
    Video,
    Protocol,
    Sticker,
    Reaction,
    PollCreation,
    PollUpdate,
    /// A wrapper still present after [`MAX_WRAPPER_DEPTH`] levels.
    FutureProof,
}

/// Invokes a callback macro with the content fields of `wa::Message` in wire order,
/// paired with the [`ContentType`] they map to.
///
/// `sender_key_distribution_message` and `message_context_info` are deliberately absent:
/// they ride along with real content and never describe a message on their own.
macro_rules! with_content_fields {
    ($callback:ident!($($prefix:tt)*)) => {
        $callback!($($prefix)*
            conversation => Conversation,
            image_message => Image,
            contact_message => Contact,
            location_message => Location,
            extended_text_message => ExtendedText,
            document_message => Document,
            audio_message => Audio,
            video_message => Video,
            protocol_message => Protocol,
            sticker_message => Sticker,
            view_once_message => FutureProof,
            ephemeral_message => FutureProof,
            reaction_message => Reaction,
            poll_creation_message => PollCreation,
            poll_update_message => PollUpdate,
            document_with_caption_message => FutureProof,
            view_once_message_v2 => FutureProof,
            edited_message => FutureProof,
            view_once_message_v2_extension => FutureProof,
        )
    };
}

macro_rules! first_content_type_impl {
    ($msg:expr, $($field:ident => $kind:ident),+ $(,)?) => {{
        let msg = $msg;
        $(
            if msg.$field.is_some() {
                return Some(ContentType::$kind);
            }
        )+
        None
    }};
}

/// Extension trait for wa::Message
pub trait MessageExt {
    /// Whether this message only wraps another one (device-sent, ephemeral, view-once,
    /// document-with-caption or edited).
    fn is_wrapper(&self) -> bool;
    /// The message held by the outermost wrapper. `None` when this is not a wrapper
    /// or the wrapper is empty.
    fn wrapped_message(&self) -> Option<&wa::Message>;
    fn wrapped_message_mut(&mut self) -> Option<&mut wa::Message>;
    /// Classifies this message by its first populated content field.
    fn content_type(&self) -> Option<ContentType>;
}

impl MessageExt for wa::Message {
    fn is_wrapper(&self) -> bool {
        self.device_sent_message.is_some()
            || self.ephemeral_message.is_some()
            || self.view_once_message.is_some()
            || self.document_with_caption_message.is_some()
            || self.view_once_message_v2.is_some()
            || self.view_once_message_v2_extension.is_some()
            || self.edited_message.is_some()
    }

    fn wrapped_message(&self) -> Option<&wa::Message> {
        if let Some(dsm) = &self.device_sent_message {
            return dsm.message.as_deref();
        }
        [
            &self.ephemeral_message,
            &self.view_once_message,
            &self.document_with_caption_message,
            &self.view_once_message_v2,
            &self.view_once_message_v2_extension,
            &self.edited_message,
        ]
        .into_iter()
        .flatten()
        .next()
        .and_then(|wrapper| wrapper.message.as_deref())
    }

    fn wrapped_message_mut(&mut self) -> Option<&mut wa::Message> {
        if self.device_sent_message.is_some() {
            return self
                .device_sent_message
                .as_mut()
                .and_then(|dsm| dsm.message.as_deref_mut());
        }
        [
            &mut self.ephemeral_message,
            &mut self.view_once_message,
            &mut self.document_with_caption_message,
            &mut self.view_once_message_v2,
            &mut self.view_once_message_v2_extension,
            &mut self.edited_message,
        ]
        .into_iter()
        .flatten()
        .next()
        .and_then(|wrapper| wrapper.message.as_deref_mut())
    }

    fn content_type(&self) -> Option<ContentType> {
        with_content_fields!(first_content_type_impl!(self,))
    }
}

/// Peels future-proof wrappers off a message to reach the content it carries.
///
/// At most [`MAX_WRAPPER_DEPTH`] wrappers are removed. A wrapper with nothing inside
/// yields `None`, the same as a missing message.
pub fn normalize_message_content(message: Option<&wa::Message>) -> Option<&wa::Message> {
    let mut current = message?;
    for _ in 0..MAX_WRAPPER_DEPTH {
        if !current.is_wrapper() {
            break;
        }
        current = current.wrapped_message()?;
    }
    Some(current)
}

/// Mutable counterpart of [`normalize_message_content`].
pub fn normalize_message_content_mut(
    message: Option<&mut wa::Message>,
) -> Option<&mut wa::Message> {
    let mut current = message?;
    for _ in 0..MAX_WRAPPER_DEPTH {
        if !current.is_wrapper() {
            break;
        }
        current = current.wrapped_message_mut()?;
    }
    Some(current)
}

pub fn get_content_type(message: Option<&wa::Message>) -> Option<ContentType> {
    message.and_then(MessageExt::content_type)
}
