use crate::models::ContractType;

/// Label the reply must start with, immediately followed by `": "` and the count.
pub const ANSWER_LABEL: &str = "Nombre de jours pouvant etre comptabiliser";

/// Build the day-count request sent to the generative service.
///
/// Inputs are embedded as given (no range checks); only the contract type is
/// lower-cased.
pub fn build_prompt(days_worked: f64, hours_worked: f64, contract: ContractType) -> String {
    format!(
        "Tu vas prendre le role d'un Agent d'immigration du gouvernement australien.\n\
         \n\
         Je suis un francais en working holiday visa, je vais te dire les heures et les jours \
         travailles dans la semaine et tu vas me dire combien de jours je peux compter.\n\
         \n\
         La reponse doit etre sous ce format la : \"{label} : (reponse).\" \
         il ne doit pas avoir d'info supplementaire.\n\
         \n\
         J'ai travaille {days} jours dans la semaine pour un total de {hours}h en {contract}",
        label = ANSWER_LABEL,
        days = days_worked,
        hours = hours_worked,
        contract = contract.prompt_label(),
    )
}
