//! Static editorial content
//!
//! The informational pages carry fixed Portuguese copy written for the
//! Angolan public. It lives here as plain data so the page views stay
//! focused on layout. Interface chrome (buttons, labels, status lines)
//! is translated through `i18n` instead.

/// Kicker, title and subtitle introducing a page section
pub struct SectionIntro {
    pub kicker: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// Headline figure quoted from an official source
pub struct OfficialStat {
    pub title: &'static str,
    pub statistic: &'static str,
    pub description: &'static str,
}

/// Short feature card on the landing page
pub struct FeatureHighlight {
    pub title: &'static str,
    pub description: &'static str,
}

/// Full-width call-to-action band
pub struct CallToAction {
    pub title: &'static str,
    pub body: &'static str,
}

/// External video with its attribution line
pub struct Video {
    pub title: &'static str,
    pub url: &'static str,
    pub caption: &'static str,
}

/// One block of long-form article copy
pub enum Block {
    SubHeader(&'static str),
    Paragraph(&'static str),
    Video(&'static Video),
}

/// Article section with an optional entry in the page side menu
pub struct ArticleSection {
    pub menu_label: Option<&'static str>,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub blocks: &'static [Block],
}

/// Bold lead followed by explanatory text, used in bullet lists
pub struct BulletPoint {
    pub label: &'static str,
    pub text: &'static str,
}

/// One component of the solution ecosystem
pub struct SolutionComponent {
    pub title: &'static str,
    pub lead: &'static str,
    pub points: &'static [BulletPoint],
}

/// Quoted testimonial with attribution
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

/// Compact information card with a short body
pub struct InfoCardText {
    pub title: &'static str,
    pub body: &'static str,
}

/// Figure card inside the research report
pub struct StudyStat {
    pub title: &'static str,
    pub statistic: &'static str,
    pub description: &'static str,
}

/// Surgical campaign entry, optionally highlighted
pub struct CampaignCard {
    pub title: &'static str,
    pub description: &'static str,
    pub highlight: bool,
}

/// Labeled value for the data charts
pub struct ChartPoint {
    pub label: &'static str,
    pub value: u64,
}

// ---------------------------------------------------------------------------
// Landing page
// ---------------------------------------------------------------------------

pub const HERO_TITLE: &str = "Restaurando a Dignidade,";
pub const HERO_TITLE_ACCENT: &str = "Uma Vida de Cada Vez.";
pub const HERO_SUBTITLE: &str = "Uma plataforma inovadora para o diagnóstico, tratamento e \
    monitoramento da fístula obstétrica em Angola, com o apoio da Inteligência Artificial.";

pub static PROBLEM_INTRO: SectionIntro = SectionIntro {
    kicker: "O Problema",
    title: "O que é a Fístula Obstétrica?",
    subtitle: "",
};

pub static PROBLEM_PARAGRAPHS: [&str; 2] = [
    "A fístula obstétrica é uma das lesões mais graves e trágicas que podem ocorrer durante o \
     parto. É uma abertura anormal entre o canal de parto e a bexiga ou o reto, resultante de um \
     trabalho de parto prolongado e obstruído, sem acesso a uma cesariana de emergência.",
    "As mulheres que sobrevivem a esta provação ficam com incontinência crónica, o que \
     frequentemente leva ao isolamento social, estigma e problemas de saúde mental. É uma \
     condição tratável, mas a falta de acesso a cuidados de qualidade impede que muitas mulheres \
     recuperem as suas vidas.",
];

pub static OFFICIAL_STATS_INTRO: SectionIntro = SectionIntro {
    kicker: "A Realidade em Números",
    title: "Uma Crise Global Silenciosa",
    subtitle: "Dados da Organização Mundial da Saúde (OMS) e do Fundo de População das Nações \
        Unidas (UNFPA) revelam a escala do problema da fístula obstétrica.",
};

pub static OFFICIAL_STATS: [OfficialStat; 3] = [
    OfficialStat {
        title: "Globalmente",
        statistic: "2 Milhões+",
        description: "É o número estimado de mulheres que vivem atualmente com fístula \
            obstétrica não tratada, a maioria em África e na Ásia.",
    },
    OfficialStat {
        title: "Em África",
        statistic: "90%",
        description: "Cerca de 90% de todos os casos de fístula ocorrem no continente africano \
            e no sul da Ásia, destacando a desigualdade no acesso a cuidados de saúde.",
    },
    OfficialStat {
        title: "Em Angola",
        statistic: "Crítica",
        description: "Com uma das mais altas taxas de mortalidade materna, Angola é um dos \
            países onde a prevenção e o tratamento da fístula são mais urgentes.",
    },
];

pub static SOLUTION_INTRO: SectionIntro = SectionIntro {
    kicker: "Nossa Solução",
    title: "Uma Plataforma Digital Integrada com IA",
    subtitle: "Em parceria com o Centro Evangélico de Medicina do Lubango (CEML), desenvolvemos \
        um ecossistema de software para enfrentar este desafio, capacitando tanto as pacientes \
        como os profissionais de saúde.",
};

pub static SOLUTION_FEATURES: [FeatureHighlight; 4] = [
    FeatureHighlight {
        title: "Apoio à Paciente",
        description: "Um aplicativo mobile que guia a gestante, permitindo o registo de \
            sintomas e a comunicação direta com os seus médicos.",
    },
    FeatureHighlight {
        title: "Dashboard Médico",
        description: "Uma plataforma web para os profissionais de saúde gerirem o histórico \
            clínico, acompanharem gravidezes e monitorarem casos de fístula.",
    },
    FeatureHighlight {
        title: "Diagnóstico com IA",
        description: "Um modelo de Inteligência Artificial treinado para analisar dados e \
            fornecer uma segunda opinião no diagnóstico da fístula.",
    },
    FeatureHighlight {
        title: "Monitoramento Contínuo",
        description: "Ferramentas para registar tratamentos e o seguimento pós-operatório, \
            garantindo um cuidado completo e a longo prazo.",
    },
];

pub static SURVEY_CTA: CallToAction = CallToAction {
    title: "Ajude-nos a Mapear o Conhecimento",
    body: "A sua opinião é fundamental. Responda ao nosso questionário anónimo para nos ajudar \
        a compreender melhor a perceção pública sobre a fístula obstétrica e a direcionar os \
        nossos esforços de sensibilização.",
};

pub static CONTACT_CTA: CallToAction = CallToAction {
    title: "Junte-se à Nossa Missão",
    body: "Se é um profissional de saúde, investigador ou uma organização interessada em \
        colaborar, entre em contato ou aceda ao portal.",
};

// ---------------------------------------------------------------------------
// About page
// ---------------------------------------------------------------------------

pub const ABOUT_KICKER: &str = "Compreender para Curar";
pub const ABOUT_TITLE: &str = "Fístula Obstétrica: A Lesão Silenciosa";

pub static UNFPA_VIDEO: Video = Video {
    title: "Vídeo do UNFPA sobre a Fístula Obstétrica",
    url: "https://www.youtube.com/watch?v=WTSkQnBsXg0",
    caption: "Vídeo: Campanha \"End Fistula\" do Fundo de População das Nações Unidas (UNFPA).",
};

pub static WHO_INNOVATION_VIDEO: Video = Video {
    title: "Inovação na Saúde Global",
    url: "https://www.youtube.com/watch?v=xszHGTXhD00",
    caption: "Vídeo: Playlist da OMS sobre inovação na saúde.",
};

pub static ABOUT_SECTIONS: [ArticleSection; 6] = [
    ArticleSection {
        menu_label: Some("Perspetiva Global"),
        title: "Perspetiva Global",
        subtitle: "Definição, causas e consequências da fístula obstétrica, segundo a OMS e o \
            UNFPA.",
        blocks: &[
            Block::SubHeader("O que é a Fístula Obstétrica?"),
            Block::Paragraph(
                "A fístula obstétrica é uma abertura anormal entre o canal de parto e a bexiga \
                 (vesicovaginal) ou o reto (retovaginal), resultante de um trabalho de parto \
                 prolongado e obstruído. Esta condição leva a uma incontinência crónica, \
                 destruindo a vida social e económica da mulher.",
            ),
            Block::Video(&UNFPA_VIDEO),
        ],
    },
    ArticleSection {
        menu_label: Some("A Fístula em África"),
        title: "A Fístula em África",
        subtitle: "O epicentro da crise, com desafios únicos e uma necessidade urgente de ação.",
        blocks: &[Block::Paragraph(
            "A OMS estima que mais de 2 milhões de mulheres, principalmente na África \
             Subsariana, vivem com fístula não tratada, com 50.000 a 100.000 novos casos a cada \
             ano. Os principais desafios incluem a carência de cirurgiões treinados, o difícil \
             acesso geográfico a hospitais e as barreiras económicas e sociais que impedem as \
             mulheres de procurar ajuda.",
        )],
    },
    ArticleSection {
        menu_label: Some("A Realidade em Angola"),
        title: "A Realidade em Angola",
        subtitle: "O contexto nacional e o papel de centros de referência como o CEML.",
        blocks: &[Block::Paragraph(
            "Angola enfrenta desafios significativos. A alta taxa de mortalidade materna está \
             diretamente ligada às causas da fístula. Centros como o Centro Evangélico de \
             Medicina do Lubango (CEML) são cruciais, tendo já tratado centenas de mulheres e \
             tornando-se uma luz de esperança na região. O nosso projeto visa apoiar \
             diretamente este trabalho.",
        )],
    },
    ArticleSection {
        menu_label: Some("Prevenção"),
        title: "Prevenção: A Chave para Erradicar a Fístula",
        subtitle: "A fístula obstétrica é quase inteiramente evitável através de estratégias de \
            saúde pública e empoderamento.",
        blocks: &[Block::Paragraph(
            "A prevenção é a arma mais poderosa. Envolve garantir que cada mulher tenha acesso \
             a cuidados pré-natais de qualidade, a assistência de um profissional qualificado \
             durante o parto, e a capacidade de chegar a um centro cirúrgico a tempo, caso \
             surjam complicações.",
        )],
    },
    ArticleSection {
        menu_label: Some("Tratamento"),
        title: "Tratamento e Reabilitação",
        subtitle: "A cirurgia reparadora, combinada com apoio psicossocial, oferece uma nova \
            oportunidade de vida.",
        blocks: &[Block::Paragraph(
            "Para as mulheres que já sofrem com a condição, o tratamento principal é a \
             cirurgia reparadora, que tem uma taxa de sucesso superior a 90% para casos \
             simples. A reabilitação holística, incluindo fisioterapia e apoio psicossocial, é \
             fundamental para a recuperação completa e a reintegração da mulher na sua \
             comunidade.",
        )],
    },
    ArticleSection {
        menu_label: None,
        title: "Estudos Atuais e Inovação",
        subtitle: "A tecnologia e a pesquisa contínua são cruciais para melhorar os resultados.",
        blocks: &[Block::Paragraph(
            "A utilização de sistemas de IA, como o desenvolvido neste projeto, representa uma \
             nova fronteira. A IA pode analisar dados para auxiliar no diagnóstico, sugerir \
             tratamentos com base em casos anteriores e otimizar o monitoramento, capacitando \
             os profissionais de saúde e melhorando os resultados para cada mulher.",
        )],
    },
];

// ---------------------------------------------------------------------------
// Data charts
// ---------------------------------------------------------------------------

pub const GLOBAL_BURDEN_TITLE: &str = "Dimensão Global do Problema";
pub static GLOBAL_BURDEN: [ChartPoint; 2] = [
    ChartPoint {
        label: "Mulheres com Fístula",
        value: 2_000_000,
    },
    ChartPoint {
        label: "Novos Casos/Ano",
        value: 75_000,
    },
];

pub const CONTINENTAL_SHARE_TITLE: &str = "Distribuição dos Casos por Região";
pub static CONTINENTAL_SHARE: [ChartPoint; 3] = [
    ChartPoint {
        label: "África Subsariana",
        value: 65,
    },
    ChartPoint {
        label: "Ásia",
        value: 30,
    },
    ChartPoint {
        label: "Outras Regiões",
        value: 5,
    },
];

pub const ANGOLA_TREND_TITLE: &str = "Novos Casos em Angola";
pub static ANGOLA_TREND: [ChartPoint; 5] = [
    ChartPoint {
        label: "2020",
        value: 500,
    },
    ChartPoint {
        label: "2022",
        value: 480,
    },
    ChartPoint {
        label: "2024",
        value: 450,
    },
    ChartPoint {
        label: "2026 (Proj.)",
        value: 350,
    },
    ChartPoint {
        label: "2030 (Meta)",
        value: 150,
    },
];

// ---------------------------------------------------------------------------
// Solution page
// ---------------------------------------------------------------------------

pub const SOLUTION_PAGE_TITLE: &str = "A Nossa Solução Tecnológica";
pub const SOLUTION_PAGE_SUBTITLE: &str = "Um ecossistema digital integrado para transformar o \
    cuidado da saúde materna e combater a fístula obstétrica em Angola.";

pub static SOLUTION_COMPONENTS: [SolutionComponent; 4] = [
    SolutionComponent {
        title: "API Central e Base de Dados",
        lead: "O coração do sistema é uma API RESTful robusta, construída com Node.js e \
            Express.js. Ela centraliza toda a lógica de negócio e comunica-se com uma base de \
            dados MongoDB, garantindo que os dados sejam consistentes, seguros e acessíveis por \
            todas as nossas aplicações.",
        points: &[
            BulletPoint {
                label: "Segurança",
                text: "Autenticação baseada em JWT e encriptação de dados sensíveis.",
            },
            BulletPoint {
                label: "Escalabilidade",
                text: "Pronta para crescer à medida que mais pacientes e profissionais aderem.",
            },
            BulletPoint {
                label: "Fonte Única de Verdade",
                text: "Garante a integridade dos dados clínicos em todo o ecossistema.",
            },
        ],
    },
    SolutionComponent {
        title: "Aplicativo Mobile: Meu Bebê e Eu",
        lead: "Uma aplicação móvel para a gestante, focada no empoderamento e no acompanhamento \
            ativo da sua saúde. Permite que a paciente seja uma parceira nos seus próprios \
            cuidados.",
        points: &[
            BulletPoint {
                label: "Diário de Saúde",
                text: "Registo de sintomas, humor e notas importantes.",
            },
            BulletPoint {
                label: "Comunicação Direta",
                text: "Um canal seguro para conversar com o médico responsável.",
            },
            BulletPoint {
                label: "Acompanhamento Interativo",
                text: "Visualização da evolução do bebé e contagem de movimentos fetais.",
            },
            BulletPoint {
                label: "Educação",
                text: "Acesso a guias de cuidado e alertas informativos.",
            },
        ],
    },
    SolutionComponent {
        title: "Dashboards Web para Profissionais",
        lead: "Duas plataformas web distintas para equipar os profissionais de saúde do CEML \
            com as ferramentas necessárias para um cuidado mais eficiente e baseado em dados.",
        points: &[
            BulletPoint {
                label: "Dashboard Geral",
                text: "Para a gestão do dia-a-dia, acompanhamento pré-natal e comunicação com \
                    as pacientes.",
            },
            BulletPoint {
                label: "Dashboard de Fístula",
                text: "Uma ferramenta especializada para o registo detalhado de casos, gestão \
                    de tratamentos, monitoramento pós-operatório e, crucialmente, interação com \
                    os modelos de IA.",
            },
        ],
    },
    SolutionComponent {
        title: "O Poder da Inteligência Artificial",
        lead: "O componente mais inovador do projeto. Usamos modelos de Machine Learning, \
            treinados com dados clínicos, para funcionar como um sistema de apoio à decisão \
            para os médicos.",
        points: &[
            BulletPoint {
                label: "Auxílio ao Diagnóstico",
                text: "Analisa os dados de um novo caso e sugere um diagnóstico provável, \
                    ajudando a acelerar a triagem.",
            },
            BulletPoint {
                label: "Sugestão de Tratamento",
                text: "Com base no perfil completo do caso, o modelo recomenda a abordagem \
                    terapêutica com a maior probabilidade de sucesso.",
            },
            BulletPoint {
                label: "Aprendizagem Contínua",
                text: "O sistema está desenhado para que os modelos possam ser retreinados com \
                    novos dados, tornando-se cada vez mais precisos.",
            },
        ],
    },
];

pub static TESTIMONIALS_INTRO: SectionIntro = SectionIntro {
    kicker: "",
    title: "O Impacto na Prática Clínica",
    subtitle: "A tecnologia ao serviço de quem cuida e de quem precisa de cuidado.",
};

pub static TESTIMONIALS: [Testimonial; 2] = [
    Testimonial {
        quote: "Com esta ferramenta, temos uma visão completa do histórico da paciente num \
            único local. A capacidade de receber uma sugestão da IA baseada em dados ajuda-nos \
            a tomar decisões mais informadas e a otimizar o plano de tratamento para cada \
            mulher. É um passo gigante para o cuidado da fístula em Angola.",
        name: "Dr. Exemplo",
        role: "Cirurgião de Fístula, CEML",
    },
    Testimonial {
        quote: "Saber que posso enviar uma mensagem ao meu médico a qualquer momento e registar \
            como me sinto no diário deu-me uma segurança que nunca tive antes. Acompanhar a \
            evolução do meu bebé semana a semana trouxe muita alegria à minha gravidez. \
            Senti-me verdadeiramente cuidada.",
        name: "Maria (nome fictício)",
        role: "Paciente Acompanhada",
    },
];

// ---------------------------------------------------------------------------
// Prevention and treatment page
// ---------------------------------------------------------------------------

pub const PREVENTION_PAGE_TITLE: &str = "Prevenção, Tratamento e Pesquisa";
pub const PREVENTION_PAGE_SUBTITLE: &str = "A fístula obstétrica é evitável e tratável. \
    Conheça as estratégias e os avanços que trazem esperança a milhões de mulheres.";

pub static PREVENTION_SECTION: SectionIntro = SectionIntro {
    kicker: "",
    title: "Prevenção: A Chave para Erradicar a Fístula",
    subtitle: "A fístula obstétrica é quase inteiramente evitável. A prevenção é o pilar mais \
        importante no combate a esta condição.",
};

pub const PREVENTION_LEAD: &str = "A estratégia mais eficaz contra a fístula obstétrica não é \
    o tratamento, mas sim a prevenção. Isto envolve uma abordagem multifacetada que aborda \
    tanto as causas médicas diretas como as raízes sociais e económicas do problema.";

pub static PREVENTION_CARDS: [InfoCardText; 4] = [
    InfoCardText {
        title: "Cuidados Pré-Natais de Qualidade",
        body: "O acompanhamento regular durante a gravidez permite identificar fatores de \
            risco, como uma pélvis estreita ou um bebé grande, e planear um parto seguro.",
    },
    InfoCardText {
        title: "Acesso a Partos Assistidos",
        body: "Garantir que cada parto seja assistido por um profissional de saúde qualificado \
            (médico, enfermeiro ou parteira) é fundamental para identificar e gerir um \
            trabalho de parto obstruído.",
    },
    InfoCardText {
        title: "Cesarianas de Emergência",
        body: "O acesso rápido a uma cesariana quando o parto não progride é a intervenção que \
            salva tanto a vida da mãe como a do bebé, e que previne a fístula.",
    },
    InfoCardText {
        title: "Educação e Empoderamento",
        body: "Adiar a primeira gravidez, garantir a educação das raparigas e o planeamento \
            familiar são passos cruciais para reduzir o risco de partos obstruídos em corpos \
            que ainda não estão totalmente desenvolvidos.",
    },
];

pub static TREATMENT_SECTION: SectionIntro = SectionIntro {
    kicker: "",
    title: "Tratamento e Reabilitação",
    subtitle: "A cirurgia reparadora oferece uma nova oportunidade de vida para as mulheres \
        afetadas.",
};

pub static TREATMENT_BLOCKS: [Block; 6] = [
    Block::SubHeader("Cirurgia Reparadora"),
    Block::Paragraph(
        "O tratamento principal para a fístula obstétrica é a cirurgia reparadora. Realizada \
         por um cirurgião especializado, o procedimento consiste em fechar a abertura anormal. \
         Para fístulas simples, a taxa de sucesso pode ultrapassar os 90%. Casos mais \
         complexos, que envolvem tecido cicatricial extenso ou danos significativos, podem \
         exigir múltiplas cirurgias ou técnicas mais avançadas, como o uso de enxertos de \
         tecido.",
    ),
    Block::SubHeader("Abordagens Cirúrgicas"),
    Block::Paragraph(
        "Existem duas abordagens principais: a via vaginal, que é a mais comum e menos \
         invasiva, e a via abdominal (laparotomia), reservada para fístulas muito altas, \
         complexas ou quando as tentativas anteriores falharam. A escolha da técnica depende \
         da localização, tamanho e complexidade da fístula, bem como da experiência do \
         cirurgião.",
    ),
    Block::SubHeader("Reabilitação e Reintegração"),
    Block::Paragraph(
        "A cura da fístula vai para além da cirurgia. O tratamento holístico inclui \
         fisioterapia pélvica para recuperar a função muscular, aconselhamento psicológico \
         para lidar com o trauma e a depressão, e apoio à reintegração social e económica para \
         ajudar as mulheres a reconstruírem as suas vidas, livres do estigma e do isolamento.",
    ),
];

pub static STUDIES_SECTION: SectionIntro = SectionIntro {
    kicker: "",
    title: "Estudos Atuais e o Futuro",
    subtitle: "A inovação e a pesquisa contínua são cruciais para melhorar os resultados e \
        erradicar a fístula.",
};

pub static STUDIES_BLOCKS: [Block; 3] = [
    Block::Video(&WHO_INNOVATION_VIDEO),
    Block::SubHeader("Novas Técnicas Cirúrgicas e Materiais"),
    Block::Paragraph(
        "A pesquisa continua a explorar novas técnicas cirúrgicas minimamente invasivas, como \
         a laparoscopia, e o uso de biomateriais (como enxertos e selantes de fibrina) para \
         melhorar as taxas de sucesso em casos complexos e reduzir as taxas de recidiva.",
    ),
];

// Relatório sobre a fístula em Angola (2024-2025), embutido na secção de estudos.

pub const REPORT_TITLE: &str = "A Luta Contra a Fístula Obstétrica em Angola";
pub const REPORT_SUBTITLE: &str = "Um relatório sobre a prevalência, os esforços de tratamento \
    e as perspetivas futuras no país.";
pub const REPORT_INTRO: &str = "A fístula obstétrica é uma lesão devastadora, mas os esforços \
    em Angola, liderados pelo Governo em parceria com instituições como o CEML e o UNFPA, \
    estão a trazer nova esperança. Este relatório compila os dados e as iniciativas mais \
    recentes.";

pub const REPORT_PREVALENCE_TITLE: &str = "Prevalência em Angola";
pub static PREVALENCE_STAT: StudyStat = StudyStat {
    title: "Estimativa de Mulheres a Viver com Fístula",
    statistic: "10.000+",
    description: "Segundo dados do Ministério da Saúde (Maio 2025), este número reflete o \
        resultado de décadas de partos sem a assistência adequada, especialmente em zonas \
        rurais.",
};

pub const REPORT_CAMPAIGNS_TITLE: &str = "Campanhas Cirúrgicas Recentes";
pub static CAMPAIGN_CARDS: [CampaignCard; 3] = [
    CampaignCard {
        title: "Hospital Azancot de Menezes – Bié (Maio/Junho 2025)",
        description: "Meta de operar mais de 200 mulheres, devolvendo-lhes a dignidade.",
        highlight: false,
    },
    CampaignCard {
        title: "Campanhas no Bié (2024)",
        description: "Em Janeiro, 81 cirurgias foram realizadas. Em Maio, a 11ª campanha \
            previu operar mais 203 mulheres.",
        highlight: false,
    },
    CampaignCard {
        title: "Resultado Acumulado",
        description: "Cerca de 1.000 cirurgias reparadoras já foram realizadas desde o início \
            das campanhas nacionais.",
        highlight: true,
    },
];

pub const REPORT_RESEARCH_TITLE: &str = "Pesquisas Científicas e Resultados";
pub const RESEARCH_QUOTE: &str = "\"Um estudo conduzido no CEML entre 2011 e 2016 analisou 407 \
    procedimentos em 243 mulheres, revelando fatores críticos para o sucesso...\"";

pub static RESEARCH_STATS: [StudyStat; 2] = [
    StudyStat {
        title: "Taxa de Sucesso Geral",
        statistic: "42%",
        description: "Na primeira tentativa cirúrgica.",
    },
    StudyStat {
        title: "Chance de Cura em Reoperações",
        statistic: "5x Maior",
        description: "Mulheres que passaram por cirurgias subsequentes tiveram 5 vezes mais \
            chances de cura.",
    },
];

pub const RESEARCH_CONCLUSION: &str = "Este estudo destaca a importância do acompanhamento \
    contínuo e da especialização dos profissionais.";

pub const REPORT_SUPPORT_TITLE: &str = "Apoio, Desafios e o Futuro";
pub const REPORT_SUPPORT: &str = "O apoio de parceiros internacionais como o UNFPA e a Fistula \
    Foundation tem sido vital, fornecendo equipamento, formação e apoio institucional. No \
    entanto, Angola ainda enfrenta desafios como a carência de centros especializados em todas \
    as províncias e o estigma que impede muitas mulheres de procurar tratamento.";

pub const RECOMMENDATIONS_TITLE: &str = "Recomendações Futuras";
pub static RECOMMENDATIONS: [&str; 4] = [
    "Aumentar o número de campanhas cirúrgicas por província.",
    "Investir na formação contínua de profissionais de saúde.",
    "Fortalecer programas de prevenção através da educação.",
    "Reforçar parcerias para apoio técnico e financeiro.",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn about_side_menu_lists_five_sections() {
        let entries: Vec<_> = ABOUT_SECTIONS
            .iter()
            .filter_map(|s| s.menu_label)
            .collect();
        assert_eq!(
            entries,
            vec![
                "Perspetiva Global",
                "A Fístula em África",
                "A Realidade em Angola",
                "Prevenção",
                "Tratamento",
            ]
        );
    }

    #[test]
    fn chart_datasets_are_nonempty() {
        assert!(GLOBAL_BURDEN.iter().all(|p| p.value > 0));
        let continental_total: u64 = CONTINENTAL_SHARE.iter().map(|p| p.value).sum();
        assert_eq!(continental_total, 100, "regional shares are percentages");
        assert_eq!(ANGOLA_TREND.len(), 5);
    }

    #[test]
    fn video_links_open_on_youtube() {
        for video in [&UNFPA_VIDEO, &WHO_INNOVATION_VIDEO] {
            assert!(video.url.starts_with("https://www.youtube.com/watch?v="));
            assert!(!video.caption.is_empty());
        }
    }
}
