//! Portuguese chrome strings (the default language)

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "Meu Bebê e Eu");
    m.insert(
        Key::AppTagline,
        "Fístula Obstétrica: Prevenção, Tratamento e Esperança",
    );

    // Navigation
    m.insert(Key::NavHome, "Início");
    m.insert(Key::NavAbout, "O Que é Fístula");
    m.insert(Key::NavSolution, "Nossa Solução");
    m.insert(Key::NavPrevention, "Prevenção e Tratamento");
    m.insert(Key::NavSurvey, "Questionário");
    m.insert(Key::NavInterest, "Manifestar Interesse");
    m.insert(Key::NavSettings, "Definições");

    // Navigation Controls
    m.insert(Key::Back, "Voltar");
    m.insert(Key::Forward, "Avançar");

    // Common UI
    m.insert(Key::Retry, "Tentar novamente");
    m.insert(Key::BackToHome, "Voltar à Página Principal");
    m.insert(Key::OnThisPage, "Nesta Página");

    // Video references
    m.insert(Key::VideoOpen, "Assistir no YouTube");
    m.insert(Key::VideoCopyLink, "Copiar link do vídeo");
    m.insert(
        Key::VideoLinkCopied,
        "Link copiado para a área de transferência",
    );

    // Home - dynamic statistics section
    m.insert(Key::StatsKicker, "Dados em Tempo Real");
    m.insert(Key::StatsTitle, "Perceção Pública Sobre a Fístula");
    m.insert(
        Key::StatsIntro,
        "Resultados agregados e anónimos das respostas ao nosso questionário, \
         mostrando o nível de conhecimento da comunidade.",
    );
    m.insert(Key::StatsLoading, "A carregar estatísticas...");
    m.insert(
        Key::StatsUnavailable,
        "Não foi possível carregar as estatísticas no momento.",
    );
    m.insert(Key::StatsTotalLabel, "Total de Respostas Recebidas");
    m.insert(Key::StatsAwarenessLabel, "Já ouviram falar sobre Fístula");
    m.insert(
        Key::StatsCauseLabel,
        "Identificam a causa principal corretamente",
    );
    m.insert(Key::StatsUpdatedAt, "Atualizado às");

    // Home - calls to action
    m.insert(Key::HomeSurveyAction, "Responder ao Questionário");
    m.insert(Key::HomeInterestAction, "Manifestar Interesse");
    m.insert(Key::HomeSolutionAction, "Conheça a Solução");

    // Survey page
    m.insert(Key::SurveyTitle, "Questionário de Conhecimento");
    m.insert(
        Key::SurveyIntro,
        "Ajude-nos a avaliar a perceção pública sobre a Fístula Obstétrica. \
         As suas respostas são anónimas.",
    );
    m.insert(
        Key::SurveyDemographicsTitle,
        "Informações Demográficas (Opcional)",
    );
    m.insert(Key::SurveyAgeLabel, "Faixa Etária");
    m.insert(Key::SurveyGenderLabel, "Gênero");
    m.insert(Key::SurveyProvinceLabel, "Província (Angola)");
    m.insert(Key::SurveyProvincePlaceholder, "Ex: Huíla");
    m.insert(Key::SurveyPreferNotToSay, "Prefiro não dizer");
    m.insert(
        Key::SurveyQ1Title,
        "1. Já ouviu falar sobre Fístula Obstétrica?*",
    );
    m.insert(
        Key::SurveyQ2Title,
        "2. Na sua opinião, o que é a fístula obstétrica?*",
    );
    m.insert(
        Key::SurveyQ3Title,
        "3. Quais acredita que são as principais causas? (Pode selecionar várias)",
    );
    m.insert(
        Key::SurveyQ4Title,
        "4. Na sua opinião, a fístula obstétrica tem tratamento?*",
    );
    m.insert(Key::SurveyYes, "Sim");
    m.insert(Key::SurveyNo, "Não");
    m.insert(Key::SurveyGenderFemale, "Feminino");
    m.insert(Key::SurveyGenderMale, "Masculino");
    m.insert(Key::SurveyGenderOther, "Outro");
    m.insert(Key::SurveyAgeUnder18, "< 18 anos");
    m.insert(Key::SurveyAge18To25, "18-25 anos");
    m.insert(Key::SurveyAge26To35, "26-35 anos");
    m.insert(Key::SurveyAge36To50, "36-50 anos");
    m.insert(Key::SurveyAgeOver50, "> 50 anos");
    m.insert(
        Key::SurveyDefInfection,
        "Uma infecção sexualmente transmissível.",
    );
    m.insert(
        Key::SurveyDefOpening,
        "Uma abertura anormal entre o canal de parto e a bexiga ou o reto.",
    );
    m.insert(Key::SurveyDefGenetic, "Uma complicação genética herdada.");
    m.insert(Key::SurveyDefUnknown, "Não sei / Não tenho a certeza.");
    m.insert(
        Key::SurveyCauseProlongedLabor,
        "Trabalho de parto prolongado e sem assistência",
    );
    m.insert(Key::SurveyCauseHygiene, "Falta de higiene pessoal");
    m.insert(
        Key::SurveyCausePhysicalEffort,
        "Levantar objetos pesados durante a gravidez",
    );
    m.insert(
        Key::SurveyCauseFailedSurgery,
        "Complicações de uma cesariana ou outra cirurgia",
    );
    m.insert(Key::SurveyTreatableYes, "Sim, através de cirurgia");
    m.insert(Key::SurveyTreatableNo, "Não, é uma condição permanente");
    m.insert(Key::SurveyTreatableUnknown, "Não sei / Não tenho a certeza");
    m.insert(Key::SurveySubmit, "Enviar Respostas");
    m.insert(Key::SurveySubmitting, "A enviar...");
    m.insert(
        Key::SurveyValidationMissing,
        "Por favor responda às perguntas obrigatórias.",
    );
    m.insert(Key::SurveyRejectedFallback, "Falha ao enviar a sua resposta.");
    m.insert(Key::SurveySuccessTitle, "Obrigado!");
    m.insert(
        Key::SurveySuccessBody,
        "A sua resposta foi submetida com sucesso e irá ajudar-nos a compreender \
         melhor o nível de conhecimento sobre a fístula obstétrica.",
    );
    m.insert(Key::SurveyAnswerAgain, "Responder novamente");

    // Interest page
    m.insert(Key::InterestTitle, "Manifeste o Seu Interesse");
    m.insert(
        Key::InterestIntro,
        "Se é um profissional de saúde, gestor de uma clínica ou hospital, e tem \
         interesse em usar as nossas aplicações, por favor, preencha o formulário \
         abaixo.",
    );
    m.insert(Key::InterestNamePlaceholder, "Seu Nome Completo");
    m.insert(Key::InterestEmailPlaceholder, "Seu Email de Contato");
    m.insert(Key::InterestOrgPlaceholder, "Organização (Opcional)");
    m.insert(Key::InterestRolePlaceholder, "Seu Cargo (Opcional)");
    m.insert(
        Key::InterestMessagePlaceholder,
        "Deixe uma mensagem (opcional)...",
    );
    m.insert(Key::InterestSubmit, "Enviar Manifestação");
    m.insert(
        Key::InterestValidationMissing,
        "Preencha o nome e um email válido.",
    );
    m.insert(
        Key::InterestRejectedFallback,
        "Falha ao enviar a sua mensagem. Tente novamente.",
    );
    m.insert(Key::InterestSuccessTitle, "Obrigado!");
    m.insert(
        Key::InterestSuccessBody,
        "A sua manifestação de interesse foi enviada com sucesso. Entraremos em \
         contato consigo em breve.",
    );

    // Shared form errors
    m.insert(
        Key::GenericSubmitError,
        "Ocorreu um erro. Por favor, tente novamente.",
    );

    // Footer
    m.insert(Key::FooterRights, "Todos os direitos reservados.");
    m.insert(
        Key::FooterCredit,
        "Um projeto de monografia de Jefte Felino Quintion Sambango.",
    );

    // Settings Page
    m.insert(Key::SettingsTitle, "Definições");
    m.insert(Key::SettingsDisplayTitle, "Apresentação");
    m.insert(Key::SettingsLanguage, "Idioma");
    m.insert(
        Key::SettingsLanguageDesc,
        "Idioma da interface (o conteúdo editorial permanece em português)",
    );
    m.insert(Key::SettingsDarkMode, "Modo escuro");
    m.insert(Key::SettingsDarkModeDesc, "Usar o tema escuro da aplicação");
    m.insert(Key::SettingsAboutTitle, "Sobre");
    m.insert(Key::SettingsVersion, "Versão");
    m.insert(Key::SettingsApiUrl, "Endereço da API");
    m.insert(
        Key::SettingsApiUrlDesc,
        "Definido pela variável de ambiente MEU_BEBE_API_URL",
    );
    m.insert(
        Key::SettingsDescription,
        "Plataforma de sensibilização e recolha de dados sobre a fístula \
         obstétrica em Angola, em parceria com o CEML.",
    );

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
