//! Notification bodies for a registration
//!
//! Plain-text Indonesian templates. Pure functions: the same record always
//! yields byte-identical output.

use crate::models::RegistrationRecord;

/// School name used in the parent confirmation
pub const SCHOOL_NAME: &str = "TK Nuryanti Global Islamic Montessori School";

/// Contact number quoted to parents
pub const CONTACT_PHONE: &str = "(62) 85721549005";

/// Subject of the email sent to the registration inbox
pub const INTERNAL_NOTICE_SUBJECT: &str = "Pendaftaran Siswa Baru";

/// Subject of the email sent back to the parent
pub const CONFIRMATION_SUBJECT: &str = "Terima Kasih atas Pendaftaran Anda";

/// Internal notice: every field of the record in fixed order.
///
/// Also the text pre-filled into the WhatsApp chat.
pub fn internal_notice(record: &RegistrationRecord) -> String {
    format!(
        "Pendaftaran Siswa Baru:\n\
         \n\
         Nama Anak: {}\n\
         Nama Orang Tua: {}\n\
         Email: {}\n\
         Nomor Telepon: {}\n\
         Alamat: {}\n",
        record.child_name(),
        record.parent_name(),
        record.email(),
        record.phone(),
        record.address(),
    )
}

/// Thank-you message for the parent.
pub fn parent_confirmation(parent_name: &str, child_name: &str) -> String {
    format!(
        "Kepada Yth. {parent_name},\n\
         \n\
         Terima kasih telah mendaftarkan {child_name} di {SCHOOL_NAME}.\n\
         \n\
         Kami telah menerima pendaftaran Anda dan sedang memproses data yang Anda berikan. \
         Tim kami akan menghubungi Anda dalam waktu 2-3 hari kerja untuk informasi lebih lanjut \
         mengenai proses pendaftaran.\n\
         \n\
         Jika Anda memiliki pertanyaan, jangan ragu untuk menghubungi kami di nomor telepon \
         {CONTACT_PHONE} atau membalas email ini.\n\
         \n\
         Terima kasih atas kepercayaan Anda kepada {SCHOOL_NAME}.\n\
         \n\
         Salam,\n\
         Tim Pendaftaran\n\
         {SCHOOL_NAME}\n"
    )
}

/// Both bodies for one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedMessages {
    pub internal_notice: String,
    pub confirmation: String,
}

impl ComposedMessages {
    pub fn for_record(record: &RegistrationRecord) -> Self {
        Self {
            internal_notice: internal_notice(record),
            confirmation: parent_confirmation(record.parent_name(), record.child_name()),
        }
    }
}
