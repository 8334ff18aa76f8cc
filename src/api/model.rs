//! Backend API model types
//!
//! Request and response bodies for the questionário backend. Field names
//! follow the backend's Portuguese camelCase wire format.

use serde::{Deserialize, Serialize};

/// One questionnaire submission
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyPayload {
    pub faixa_etaria: String,
    pub genero: String,
    pub provincia: String,
    pub ja_ouviu_falar: String,
    pub definicao: String,
    pub causas: Vec<String>,
    pub sintomas: Vec<String>,
    pub tratavel: String,
    pub prevencao: Vec<String>,
    pub informacao_adicional: String,
}

/// One interest registration
#[derive(Debug, Clone, Default, Serialize)]
pub struct InterestPayload {
    pub nome: String,
    pub email: String,
    pub organizacao: String,
    pub cargo: String,
    pub mensagem: String,
}

/// One named bucket in an aggregated distribution
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryCount {
    pub name: String,
    pub value: u64,
}

/// Aggregated questionnaire statistics.
///
/// Every field is optional on the wire; an empty backend returns a body
/// with no counts at all.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    #[serde(default)]
    pub total_submissoes: Option<u64>,
    #[serde(default)]
    pub distribuicao_ja_ouviu_falar: Vec<CategoryCount>,
    #[serde(default)]
    pub distribuicao_tratavel: Vec<CategoryCount>,
    #[serde(default)]
    pub contagem_causas: Vec<CategoryCount>,
}

/// Error body the backend attaches to rejected requests
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn survey_serializes_with_wire_field_names() {
        let payload = SurveyPayload {
            faixa_etaria: "18-25".to_string(),
            ja_ouviu_falar: "sim".to_string(),
            causas: vec!["parto_prolongado".to_string()],
            ..SurveyPayload::default()
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["faixaEtaria"], "18-25");
        assert_eq!(json["jaOuviuFalar"], "sim");
        assert_eq!(json["causas"][0], "parto_prolongado");
        assert_eq!(json["informacaoAdicional"], "");
        assert!(json["sintomas"].as_array().unwrap().is_empty());
    }

    #[test]
    fn interest_keeps_lowercase_names() {
        let payload = InterestPayload {
            nome: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            ..InterestPayload::default()
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["nome"], "Ana");
        assert_eq!(json["organizacao"], "");
    }

    #[test]
    fn stats_decodes_full_payload() {
        let json = r#"{
            "totalSubmissoes": 42,
            "distribuicaoJaOuviuFalar": [
                {"name": "sim", "value": 30},
                {"name": "nao", "value": 12}
            ],
            "contagemCausas": [{"name": "parto_prolongado", "value": 18}]
        }"#;
        let response: StatsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.total_submissoes, Some(42));
        assert_eq!(response.distribuicao_ja_ouviu_falar.len(), 2);
        assert_eq!(response.contagem_causas[0].value, 18);
        assert!(response.distribuicao_tratavel.is_empty());
    }

    #[test]
    fn stats_decodes_empty_body() {
        let response: StatsResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.total_submissoes, None);
        assert!(response.distribuicao_ja_ouviu_falar.is_empty());
    }

    #[test]
    fn error_body_message_is_optional() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"message": "Email inválido", "statusCode": 400}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("Email inválido"));

        let body: ErrorBody = serde_json::from_str(r#"{"error": "Bad Request"}"#).unwrap();
        assert_eq!(body.message, None);
    }
}
