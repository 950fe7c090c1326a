use crate::store::Message;

/// One message as `[timestamp] sender -> recipient: content`.
pub fn format_message(msg: &Message) -> String {
    msg.to_string()
}
