//! Prompt templates and the user-facing fallback strings.
//!
//! The service talks to its users in Turkish; the model is told to answer in
//! whatever language the question was asked in.

/// Characters of extracted text sent with the analysis prompt.
pub const ANALYSIS_TEXT_LIMIT: usize = 15_000;

pub const TOPIC_MARKER: &str = "Konu: ";
pub const SUGGESTION_BULLET: &str = "- ";

pub const UPLOAD_SUCCESS_PREFIX: &str =
    "PDF işlendi. Konu ve öneriler LLM tarafından belirlendi ve saklandı.";

pub const ROOT_MESSAGE: &str = "PDF Chat Backend Çalışıyor!";

/// Topic used when no API key came with the upload.
pub fn untitled_topic(filename: &str) -> String {
    format!("'{}' başlıklı belge", filename)
}

pub fn untitled_suggestions() -> Vec<String> {
    vec![
        "Bu belgenin ana fikri nedir?".to_string(),
        "Belgedeki önemli başlıklar nelerdir?".to_string(),
    ]
}

/// Topic used when the model answered but without a `Konu:` line.
pub fn unparsed_topic(filename: &str) -> String {
    format!("'{}' hakkında", filename)
}

pub fn topic_suggestions(topic: &str) -> Vec<String> {
    vec![
        format!("{} hakkında genel bir soru sor.", topic),
        format!("{} içindeki anahtar kavramlar nelerdir?", topic),
    ]
}

/// Topic used when the analysis call itself failed.
pub fn failed_topic(filename: &str) -> String {
    format!("'{}' başlıklı belge (analiz edilemedi)", filename)
}

pub fn failed_suggestions() -> Vec<String> {
    vec!["Belgenin içeriği hakkında soru sorabilirsiniz.".to_string()]
}

/// First `ANALYSIS_TEXT_LIMIT` characters, cut on a char boundary.
pub fn analysis_window(text: &str) -> &str {
    match text.char_indices().nth(ANALYSIS_TEXT_LIMIT) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

pub fn build_analysis_prompt(text: &str) -> String {
    let text_for_analysis = analysis_window(text);
    format!(
        r#"Aşağıdaki metin bir PDF belgesinden alınmıştır.
Bu metni analiz ederek:
1. Belgenin ana konusunu tek bir cümle veya kısa bir başlık olarak belirle.
2. Kullanıcıların bu belge hakkında sorabileceği 2-3 adet spesifik ve ilgi çekici soru önerisi oluştur.

Cevabını şu formatta ver:
Konu: [Belgenin ana konusu]
Öneriler:
- [Öneri 1]
- [Öneri 2]
- [Öneri 3]

Metin:
---
{text_for_analysis}
---
"#
    )
}

pub fn format_suggestions(suggestions: &[String]) -> String {
    suggestions
        .iter()
        .map(|s| format!("{}{}", SUGGESTION_BULLET, s))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn build_chat_prompt(topic: &str, suggestions: &[String], query: &str, context_text: &str) -> String {
    let suggestions_string = format_suggestions(suggestions);
    format!(
        r#"
Sen, '{topic}' hakkında derinlemesine bilgi sahibi, nazik ve profesyonel bir asistansın.
Görevin, kullanıcıya yalnızca bu belge içeriğiyle ilgili sorularında yardımcı olmaktır.

Kullanıcının Sorusu: "{query}"

Talimatlar:
1. Eğer kullanıcının sorusu sadece genel bir selamlama ise (örneğin "Merhaba", "Nasılsın?", "Selam") veya '{topic}' konusuyla açıkça alakasız görünüyorsa, onu nazikçe belgenin konusuna yönlendir. Bu durumda şöyle bir yanıt ver:
   "Merhaba! Ben size {topic} hakkında yardımcı olmak için buradayım. Bu konuyla ilgili neyi merak ediyorsunuz? Dilerseniz size şu konularda yardımcı olabilirim:
{suggestions_string}"
2. Eğer kullanıcının sorusu '{topic}' ile ilgiliyse, cevabını yalnızca aşağıda sağlanan "PDF Metni" bölümünü kullanarak oluştur.
3. Cevap PDF metninde bulunmuyorsa, 'Üzgünüm, bu bilgiye belgede rastlayamadım.' veya 'Bu konu hakkında belgede spesifik bir bilgi bulunmuyor.' gibi nazik bir ifadeyle belirt.
4. Kesinlikle dışarıdan veya genel bilgilerden cevap üretme. Cevapların her zaman yalnızca sağlanan PDF metnine dayalı olmalıdır.
5. Cevapların insancıl, anlaşılır ve yardımsever olsun.
6. Kullanıcının soru sorduğu dilde cevap ver.

PDF Metni:
---
{context_text}
---
"#
    )
}
