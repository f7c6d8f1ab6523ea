//! Welcome text and suggested questions shown for each mode.

use unidir_types::{InteractionMode, Locale};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeGuide {
    pub title: &'static str,
    pub welcome: &'static str,
    pub suggestions: [&'static str; 3],
}

pub fn guide(locale: Locale, mode: InteractionMode) -> ModeGuide {
    use InteractionMode::*;
    use Locale::*;

    match (locale, mode) {
        (Ru, General) => ModeGuide {
            title: "Общие вопросы",
            welcome: "Здравствуйте! Я помогу разобраться с университетами и программами Казахстана. О чём хотите узнать?",
            suggestions: [
                "Какие университеты Алматы сильнее всего в IT?",
                "Сколько стоит обучение на медицине в Астане?",
                "Как получить государственный грант?",
            ],
        },
        (Ru, Twin) => ModeGuide {
            title: "Академический двойник",
            welcome: "Расскажите о своих баллах и интересах, и я покажу, куда обычно поступают абитуриенты с похожим профилем.",
            suggestions: [
                "У меня 110 баллов ЕНТ, куда поступают с таким результатом?",
                "Куда идут абитуриенты, увлечённые физикой?",
                "Какие шансы на грант с моим профилем?",
            ],
        },
        (Ru, Alternatives) => ModeGuide {
            title: "Альтернативы",
            welcome: "Не проходите на желаемую программу? Подберём реальные альтернативы по баллам, бюджету и городу.",
            suggestions: [
                "Не хватает баллов на медицину, что выбрать?",
                "Есть ли похожие программы дешевле?",
                "Какие варианты есть за пределами Алматы?",
            ],
        },
        (Ru, Career) => ModeGuide {
            title: "Карьерный навигатор",
            welcome: "Назовите профессию мечты, и я расскажу, какие программы к ней ведут и какие навыки понадобятся.",
            suggestions: [
                "Хочу стать data scientist, с чего начать?",
                "Какие профессии востребованы в Казахстане?",
                "Где учиться на инженера-нефтяника?",
            ],
        },
        (Kk, General) => ModeGuide {
            title: "Жалпы сұрақтар",
            welcome: "Сәлеметсіз бе! Қазақстан университеттері мен бағдарламалары туралы көмектесемін. Не білгіңіз келеді?",
            suggestions: [
                "Алматыдағы қай университеттер IT бойынша мықты?",
                "Астанада медицинада оқу қанша тұрады?",
                "Мемлекеттік грантты қалай алуға болады?",
            ],
        },
        (Kk, Twin) => ModeGuide {
            title: "Академиялық егіз",
            welcome: "Балдарыңыз бен қызығушылықтарыңызды айтыңыз, ұқсас профильдегі талапкерлер қайда түсетінін көрсетемін.",
            suggestions: [
                "ҰБТ-дан 110 балым бар, мұндай нәтижемен қайда түседі?",
                "Физикаға қызығатын талапкерлер қайда барады?",
                "Менің профилімде грант алу мүмкіндігі қандай?",
            ],
        },
        (Kk, Alternatives) => ModeGuide {
            title: "Балама нұсқалар",
            welcome: "Қалаған бағдарламаға өтпейсіз бе? Балл, бюджет және қала бойынша нақты балама табамыз.",
            suggestions: [
                "Медицинаға балым жетпейді, не таңдауға болады?",
                "Арзанырақ ұқсас бағдарламалар бар ма?",
                "Алматыдан тыс қандай нұсқалар бар?",
            ],
        },
        (Kk, Career) => ModeGuide {
            title: "Мансап навигаторы",
            welcome: "Арман мамандығыңызды айтыңыз, оған қандай бағдарламалар апаратынын және қандай дағдылар керегін айтамын.",
            suggestions: [
                "Data scientist болғым келеді, неден бастау керек?",
                "Қазақстанда қандай мамандықтар сұранысқа ие?",
                "Мұнай инженеріне қай жерде оқуға болады?",
            ],
        },
        (En, General) => ModeGuide {
            title: "General questions",
            welcome: "Hi! I can help you explore universities and programs in Kazakhstan. What would you like to know?",
            suggestions: [
                "Which universities in Almaty are strongest in IT?",
                "How much does medical school cost in Astana?",
                "How do I get a state grant?",
            ],
        },
        (En, Twin) => ModeGuide {
            title: "Academic twin",
            welcome: "Tell me about your scores and interests and I'll show where applicants with a similar profile usually enroll.",
            suggestions: [
                "I scored 110 on the UNT, where do people get in with that?",
                "Where do applicants who love physics usually go?",
                "What are my chances of a grant with my profile?",
            ],
        },
        (En, Alternatives) => ModeGuide {
            title: "Alternatives",
            welcome: "Not making the cut for your preferred program? Let's find realistic alternatives by score, budget and city.",
            suggestions: [
                "My score is too low for medicine, what else can I choose?",
                "Are there similar programs that cost less?",
                "What options are there outside Almaty?",
            ],
        },
        (En, Career) => ModeGuide {
            title: "Career navigator",
            welcome: "Name your dream job and I'll tell you which programs lead there and what skills you'll need.",
            suggestions: [
                "I want to become a data scientist, where do I start?",
                "Which professions are in demand in Kazakhstan?",
                "Where can I study petroleum engineering?",
            ],
        },
    }
}
