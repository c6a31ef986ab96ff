//! The "complex prompt" template: eleven questions about a prompt's goal,
//! audience and style, rendered into a sectioned prompt document.

use prompt_builder_types::{
    AnswerSet, Question, QuestionId, QuestionKind, QuestionnaireDefinition, Template,
};

pub const OBJETIVO: &str = "objetivo";
pub const AUDIENCIA: &str = "audiencia";
pub const CONTEXTO: &str = "contexto";
pub const TOM: &str = "tom";
pub const FORMATO: &str = "formato";
pub const RESTRICOES: &str = "restricoes";
pub const EXEMPLOS: &str = "exemplos";
pub const ELEMENTOS: &str = "elementos";
pub const COMPRIMENTO: &str = "comprimento";
pub const PERSPECTIVA: &str = "perspectiva";
pub const EXTRAS: &str = "extras";

/// Substituted when no required elements were selected.
pub const ELEMENTS_PLACEHOLDER: &str = "elementos relevantes";

const TITLE: &str = "Construtor de Prompts Complexos";

const PRELUDE: &str = "Crie prompts robustos, detalhados e eficazes através de um processo \
interativo e guiado. Responda algumas perguntas e obtenha um prompt profissional pronto para usar.";

const EPILOGUE: &str = "Seu Prompt Está Pronto!";

const TASK_DIRECTIVE: &str = "Com base nas informações acima, desenvolva uma resposta completa, \
estruturada e que atenda a todos os requisitos especificados. Certifique-se de seguir o tom, \
formato e perspectiva solicitados.";

/// Template for building a complex prompt step by step.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComplexPrompt;

impl ComplexPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl Template for ComplexPrompt {
    fn definition(&self) -> QuestionnaireDefinition {
        QuestionnaireDefinition::new(TITLE, questions())
            .with_prelude(PRELUDE)
            .with_epilogue(EPILOGUE)
    }

    fn render(&self, answers: &AnswerSet) -> String {
        let elementos = answers
            .get_choices(&QuestionId::new(ELEMENTOS))
            .ok()
            .map(|labels| labels.join(", "))
            .unwrap_or_else(|| ELEMENTS_PLACEHOLDER.to_string());

        let optional = [
            (RESTRICOES, "RESTRIÇÕES E LIMITAÇÕES:"),
            (EXEMPLOS, "EXEMPLOS DE REFERÊNCIA:"),
            (EXTRAS, "REQUISITOS ADICIONAIS:"),
        ]
        .into_iter()
        .filter_map(|(id, header)| {
            let value = text(answers, id);
            (!value.is_empty()).then(|| format!("\n\n{header}\n{value}"))
        })
        .collect::<String>();

        format!(
            "# OBJETIVO
{objetivo}

# CONTEXTO
{contexto}

# PÚBLICO-ALVO
{audiencia}

# INSTRUÇÕES DE FORMATO E ESTILO

**Tom de Voz:** {tom}
**Formato de Saída:** {formato}
**Tamanho da Resposta:** {comprimento}
**Perspectiva:** {perspectiva}

# ELEMENTOS OBRIGATÓRIOS
A resposta deve incluir: {elementos}
{optional}

# TAREFA
{TASK_DIRECTIVE}",
            objetivo = text(answers, OBJETIVO),
            contexto = text(answers, CONTEXTO),
            audiencia = text(answers, AUDIENCIA),
            tom = choice(answers, TOM),
            formato = choice(answers, FORMATO),
            comprimento = choice(answers, COMPRIMENTO),
            perspectiva = choice(answers, PERSPECTIVA),
        )
    }
}

fn text<'a>(answers: &'a AnswerSet, id: &str) -> &'a str {
    answers.get_text(&QuestionId::new(id)).unwrap_or_default()
}

fn choice<'a>(answers: &'a AnswerSet, id: &str) -> &'a str {
    answers.get_choice(&QuestionId::new(id)).unwrap_or_default()
}

fn questions() -> Vec<Question> {
    vec![
        Question::new(
            OBJETIVO,
            "Qual é o objetivo principal do seu prompt?",
            QuestionKind::LongText,
        ),
        Question::new(
            AUDIENCIA,
            "Quem é o público-alvo ou usuário final?",
            QuestionKind::ShortText,
        ),
        Question::new(
            CONTEXTO,
            "Descreva o contexto ou domínio de aplicação:",
            QuestionKind::LongText,
        ),
        Question::new(
            TOM,
            "Qual tom de voz deve ser usado?",
            QuestionKind::single_choice([
                "Profissional e formal",
                "Amigável e conversacional",
                "Técnico e detalhado",
                "Criativo e inspirador",
                "Educacional e explicativo",
                "Conciso e direto",
            ]),
        ),
        Question::new(
            FORMATO,
            "Qual formato de saída você prefere?",
            QuestionKind::single_choice([
                "Texto narrativo",
                "Lista com marcadores",
                "Passo a passo numerado",
                "Tabela ou estrutura",
                "Código ou scripts",
                "Perguntas e respostas",
            ]),
        ),
        Question::new(
            RESTRICOES,
            "Há alguma restrição ou limitação importante?",
            QuestionKind::LongText,
        )
        .optional(),
        Question::new(
            EXEMPLOS,
            "Você tem exemplos ou referências que deseja incluir?",
            QuestionKind::LongText,
        )
        .optional(),
        Question::new(
            ELEMENTOS,
            "Quais elementos devem estar presentes na resposta?",
            QuestionKind::multi_choice([
                "Introdução clara",
                "Exemplos práticos",
                "Explicações detalhadas",
                "Citações ou referências",
                "Conclusão ou resumo",
                "Próximos passos ou ações",
                "Avisos ou considerações",
            ]),
        )
        .optional(),
        Question::new(
            COMPRIMENTO,
            "Qual deve ser o tamanho aproximado da resposta?",
            QuestionKind::single_choice([
                "Muito curta (1-2 parágrafos)",
                "Curta (3-5 parágrafos)",
                "Média (6-10 parágrafos)",
                "Longa (10+ parágrafos)",
                "Muito detalhada e extensa",
            ]),
        ),
        Question::new(
            PERSPECTIVA,
            "De qual perspectiva a resposta deve ser escrita?",
            QuestionKind::single_choice([
                "Primeira pessoa (eu/nós)",
                "Segunda pessoa (você)",
                "Terceira pessoa (ele/ela/eles)",
                "Impessoal",
            ]),
        ),
        Question::new(
            EXTRAS,
            "Alguma informação adicional ou requisito especial?",
            QuestionKind::LongText,
        )
        .optional(),
    ]
}
